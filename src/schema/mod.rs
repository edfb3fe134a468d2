//! Type schemas the resolver walks through.
//!
//! Two sources feed completion:
//! - the **static** schema, built once from declared API capabilities
//!   ([`ApiRegistry`] → [`StaticSchema`])
//! - a **dynamic** [`SchemaTable`] owned by the host session, describing
//!   shapes observed at runtime and lent to each completion request
//!
//! Both are combined per type with [`join`].

pub mod builtin;
mod registry;
mod static_index;
mod table;

pub use registry::{ApiRegistry, FieldDecl, RootBinding, TypeDecl};
pub use static_index::StaticSchema;
pub use table::{FieldDescription, FieldKind, SchemaTable, TypeSchema, join};
