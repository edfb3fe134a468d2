//! Engine configuration and startup loading.

mod cached_engine;
mod config;
pub mod template_loader;

pub use config::{EngineConfig, TemplateSource};
pub use template_loader::TemplateError;
