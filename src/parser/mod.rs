//! Tolerant partial-expression parsing for console input
//!
//! The console buffer is almost never a complete program while the user is
//! typing. Instead of parsing it, this module:
//! - **lexes** the text before the cursor with logos, reporting unfinished
//!   strings and comments as their own token kinds
//! - **walks back** from the cursor over member dots and call argument lists
//!
//! ## Architecture
//!
//! ```text
//! Buffer + cursor
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! ChainScanner → Path ["db", "getCollection", "fi"]
//! ```

mod lexer;
mod path;
mod syntax_kind;

pub use lexer::{Lexer, Token, tokenize};
pub use path::{Path, extract_path};
pub use syntax_kind::SyntaxKind;
