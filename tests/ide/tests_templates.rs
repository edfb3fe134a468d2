#![allow(clippy::unwrap_used)]

//! Template catalog tests through the engine configuration.

use std::fs;

use shellhint::ide::{CURSOR_MARKER, CompletionEngine, CompletionKind};
use shellhint::project::{EngineConfig, TemplateError, TemplateSource, template_loader};
use shellhint::schema::SchemaTable;

use crate::helpers::completion_assertions::labels;

fn catalog_dir(entries: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let index: String = entries.iter().map(|(name, _)| format!("{name}.js\n")).collect();
    fs::write(dir.path().join(template_loader::CATALOG_FILE), index).unwrap();
    for (name, body) in entries {
        fs::write(dir.path().join(format!("{name}.js")), body).unwrap();
    }
    dir
}

#[test]
fn test_bundled_bodies_have_no_marker() {
    let index = template_loader::load_bundled();
    assert!(!index.is_empty());
    for entry in index.matching("") {
        assert!(
            !entry.body.contains(CURSOR_MARKER),
            "marker left in '{}'",
            entry.name
        );
        assert!(entry.cursor_offset <= entry.body.len());
    }
}

#[test]
fn test_engine_with_template_dir() {
    let dir = catalog_dir(&[("stats", "db.stats()"), ("status", "db.serverStatus()$0")]);
    let config = EngineConfig::default().with_template_dir(dir.path());
    let engine = CompletionEngine::new(&config);

    let items = engine.complete("sta", 3, &SchemaTable::new());
    assert_eq!(labels(&items), vec!["stats", "status"]);
    assert!(items.iter().all(|i| i.kind == CompletionKind::Snippet));
    assert_eq!(items[1].cursor_offset, Some("db.serverStatus()".len()));
}

#[test]
fn test_engine_with_missing_dir_has_no_templates() {
    let dir = tempfile::tempdir().unwrap();
    let config = EngineConfig::default().with_template_dir(dir.path().join("absent"));
    let engine = CompletionEngine::new(&config);

    assert!(engine.templates().is_empty());
    let items = engine.complete("d", 1, &SchemaTable::new());
    assert_eq!(labels(&items), vec!["db"]);
}

#[test]
fn test_load_dir_reports_missing_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let err = template_loader::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, TemplateError::MissingCatalog(_)));
}

#[test]
fn test_engine_without_templates() {
    let config = EngineConfig::default().with_templates(TemplateSource::None);
    let engine = CompletionEngine::new(&config);
    let text = "db.getCollection('x').fin";
    let items = engine.complete(text, text.len(), &SchemaTable::new());
    assert_eq!(labels(&items), vec!["find"]);
}
