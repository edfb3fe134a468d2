//! Small API surfaces for resolver and engine tests.

use once_cell::sync::Lazy;
use shellhint::ide::{CompletionEngine, TemplateEntry, TemplateIndex};
use shellhint::schema::{ApiRegistry, FieldDecl, RootBinding, StaticSchema, TypeDecl};

pub const NAMESPACE: &str = "test.api";

/// ```text
/// x : X
/// X.y : Y          X.self : X
/// Y.partA, Y.partB, Y.other : Z
/// Z.leaf : String
/// ```
pub fn chain_registry() -> ApiRegistry {
    [
        TypeDecl::new("X", NAMESPACE)
            .field(FieldDecl::property("y", "Y"))
            .field(FieldDecl::method("self", "X")),
        TypeDecl::new("Y", NAMESPACE)
            .field(FieldDecl::property("partB", "Z"))
            .field(FieldDecl::property("partA", "Z"))
            .field(FieldDecl::property("other", "Z")),
        TypeDecl::new("Z", NAMESPACE).field(FieldDecl::property("leaf", "String")),
    ]
    .into_iter()
    .collect()
}

pub fn chain_schema() -> StaticSchema {
    StaticSchema::build(&chain_registry(), &[RootBinding::new("x", "X")], NAMESPACE)
}

pub fn sample_templates() -> TemplateIndex {
    [
        TemplateEntry::new("find", "db.getCollection('$0').find({})"),
        TemplateEntry::new("findOne", "db.getCollection('$0').findOne({})"),
        TemplateEntry::new("partition", "x.y.$0"),
    ]
    .into_iter()
    .collect()
}

/// Engine over [`chain_schema`] and [`sample_templates`], built once.
pub static CHAIN_ENGINE: Lazy<CompletionEngine> =
    Lazy::new(|| CompletionEngine::from_parts(chain_schema(), sample_templates()));
