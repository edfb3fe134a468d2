//! # shellhint-base
//!
//! Context-aware autocomplete for embedded database scripting consoles.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Resolver, template index, CompletionEngine
//!   ↓
//! project   → EngineConfig, template catalog loading
//!   ↓
//! schema    → API registry, static schema, dynamic schema tables
//!   ↓
//! parser    → Logos lexer, path extraction
//!   ↓
//! base      → Primitives (TypeId, Cursor, prefix ranges)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → schema → project → ide)
// ============================================================================

/// Foundation types: TypeId, Cursor, prefix search
pub mod base;

/// Parser: Logos lexer and member chain extraction
pub mod parser;

/// Schema: API registry, static and dynamic schema tables
pub mod schema;

/// Project: engine configuration and template loading
pub mod project;

/// IDE features: completion resolution and the engine facade
pub mod ide;

// Re-export foundation types
pub use base::{TextSize, TypeId};

// Re-export the request surface
pub use ide::{CompletionEngine, CompletionItem, CompletionKind};
pub use parser::{Path, extract_path};
pub use project::{EngineConfig, TemplateSource};
pub use schema::SchemaTable;
