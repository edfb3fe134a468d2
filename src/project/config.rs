//! Engine configuration.
//!
//! Configuration is a plain value handed to [`CompletionEngine::new`]; nothing
//! is read from the environment.
//!
//! [`CompletionEngine::new`]: crate::ide::CompletionEngine::new

use std::path::PathBuf;

use smol_str::SmolStr;

use crate::schema::builtin::{SHELL_NAMESPACE, shell_registry, shell_roots};
use crate::schema::{ApiRegistry, RootBinding};

/// Where template snippets come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// The catalog compiled into the crate.
    #[default]
    Bundled,
    /// A directory with an `index` file and one `<name>.js` file per entry.
    Directory(PathBuf),
    /// No templates.
    None,
}

/// Everything needed to build a [`CompletionEngine`].
///
/// The default describes the database shell: the built-in API registry, `db`
/// as the only root binding and the bundled templates.
///
/// [`CompletionEngine`]: crate::ide::CompletionEngine
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub registry: ApiRegistry,
    pub roots: Vec<RootBinding>,
    /// API family traversal stays within.
    pub namespace: SmolStr,
    pub templates: TemplateSource,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            registry: shell_registry(),
            roots: shell_roots(),
            namespace: SmolStr::new_static(SHELL_NAMESPACE),
            templates: TemplateSource::Bundled,
        }
    }
}

impl EngineConfig {
    /// Replace the API surface.
    pub fn with_registry(mut self, registry: ApiRegistry, namespace: &str) -> Self {
        self.registry = registry;
        self.namespace = SmolStr::new(namespace);
        self
    }

    pub fn with_roots(mut self, roots: Vec<RootBinding>) -> Self {
        self.roots = roots;
        self
    }

    /// Add a root binding next to the configured ones.
    pub fn with_root(mut self, name: &str, type_id: &str) -> Self {
        self.roots.push(RootBinding::new(name, type_id));
        self
    }

    pub fn with_templates(mut self, templates: TemplateSource) -> Self {
        self.templates = templates;
        self
    }

    /// Load templates from `dir` instead of the bundled catalog.
    pub fn with_template_dir(self, dir: impl Into<PathBuf>) -> Self {
        self.with_templates(TemplateSource::Directory(dir.into()))
    }
}
