//! Parser tests
//!
//! Tests for:
//! - Tolerant lexing of partial console input
//! - Member chain extraction at the cursor

pub mod tests_lexer;
