//! IDE features: high-level completion APIs for console hosts.
//!
//! This module turns a buffer and a cursor into suggestions, using the
//! parser and schema layers underneath.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No editor types**: Uses our own types, converted at the host boundary
//! 3. **Never fails a keystroke**: Problems yield fewer suggestions, not errors
//!
//! ## Usage
//!
//! The recommended way to use this module is through `CompletionEngine`:
//!
//! ```ignore
//! use shellhint::ide::CompletionEngine;
//!
//! let engine = CompletionEngine::shared();
//! let items = engine.complete(buffer, cursor, &session_shapes);
//! ```

mod completion;
mod engine;
mod resolver;
mod templates;

pub use completion::{CompletionItem, CompletionKind};
pub use engine::CompletionEngine;
pub use resolver::resolve;
pub use templates::{CURSOR_MARKER, TemplateEntry, TemplateIndex};
