//! Foundation types for the completion engine.
//!
//! This module provides the primitives shared by every other layer:
//! - [`TypeId`] - Identity of a scripting API type or an observed runtime shape
//! - [`Cursor`] - A validated byte offset into an editor buffer
//! - [`prefix_range`] - The sorted-range prefix search every completion source uses
//!
//! This module has NO dependencies on other shellhint modules.

mod cursor;
mod prefix;
mod type_id;

pub use cursor::Cursor;
pub use prefix::{prefix_range, remainder};
pub use type_id::TypeId;

// Re-export text-size types for convenience
pub use text_size::TextSize;
