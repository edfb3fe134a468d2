//! CompletionEngine, the single entry point for console autocomplete.
//!
//! The engine owns the immutable indexes built at startup. Host sessions keep
//! their own dynamic [`SchemaTable`] and lend it to each request.
//!
//! ## Usage
//!
//! ```
//! use shellhint::ide::CompletionEngine;
//! use shellhint::project::EngineConfig;
//! use shellhint::schema::SchemaTable;
//!
//! let engine = CompletionEngine::new(&EngineConfig::default());
//! let session = SchemaTable::new();
//!
//! let text = "db.getCollection('users').fi";
//! let items = engine.complete(text, text.len(), &session);
//! assert!(items.iter().any(|i| i.label.as_ref() == "find"));
//! ```

use tracing::debug;

use super::completion::CompletionItem;
use super::resolver::resolve;
use super::templates::TemplateIndex;
use crate::parser::{Path, extract_path};
use crate::project::{EngineConfig, template_loader};
use crate::schema::{SchemaTable, StaticSchema};

/// Immutable completion state: the static schema and the template catalog.
///
/// Cheap to share by reference across threads once built.
#[derive(Clone, Debug, Default)]
pub struct CompletionEngine {
    schema: StaticSchema,
    templates: TemplateIndex,
}

impl CompletionEngine {
    /// Build every index described by `config`.
    ///
    /// Template loading failures are logged and leave the catalog empty;
    /// building an engine never fails.
    pub fn new(config: &EngineConfig) -> Self {
        let schema = StaticSchema::build(&config.registry, &config.roots, &config.namespace);
        let templates = template_loader::load_or_empty(&config.templates);
        debug!(
            types = schema.types().len(),
            templates = templates.len(),
            "completion engine ready"
        );
        Self::from_parts(schema, templates)
    }

    /// Assemble an engine from prebuilt indexes.
    pub fn from_parts(schema: StaticSchema, templates: TemplateIndex) -> Self {
        Self { schema, templates }
    }

    pub fn schema(&self) -> &StaticSchema {
        &self.schema
    }

    pub fn templates(&self) -> &TemplateIndex {
        &self.templates
    }

    /// Suggestions for the buffer `text` with the cursor at byte `cursor`.
    ///
    /// Schema suggestions come first, then templates matching the segment
    /// being typed. Returns nothing when no member chain touches the cursor.
    pub fn complete(&self, text: &str, cursor: usize, dynamic: &SchemaTable) -> Vec<CompletionItem> {
        match extract_path(text, cursor) {
            Some(path) => self.complete_path(&path, dynamic),
            None => Vec::new(),
        }
    }

    /// Suggestions for an already extracted path.
    pub fn complete_path(&self, path: &Path, dynamic: &SchemaTable) -> Vec<CompletionItem> {
        let Some(prefix) = path.last() else {
            return Vec::new();
        };
        let mut items = resolve(&self.schema, path, dynamic);
        items.extend(self.templates.find(prefix));
        items
    }
}
