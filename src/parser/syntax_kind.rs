//! Token kinds produced by the console lexer.
//!
//! The scripting language is JavaScript-like. The extractor only needs to tell
//! identifiers, member-access dots and call parentheses apart from everything
//! else, so operators collapse into a single kind.

/// All token kinds the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - never part of a path)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,  // db, getCollection, $set
    NUMBER, // 42, 3.14, 1e9
    STRING, // "a", 'a', `a`
    REGEX,  // /a+b/i

    // =========================================================================
    // UNFINISHED INPUT
    // =========================================================================
    UNTERMINATED_STRING,  // "abc   (no closing quote before end of line)
    UNTERMINATED_COMMENT, // /* abc (no closing */)
    UNTERMINATED_REGEX,   // /abc  (no closing slash before end of input)

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,   // (
    R_PAREN,   // )
    L_BRACKET, // [
    R_BRACKET, // ]
    L_BRACE,   // {
    R_BRACE,   // }
    DOT,       // .
    SEMICOLON, // ;
    COMMA,     // ,
    OPERATOR,  // = + - * / ? : ! < > & | ^ % ~ @ #

    ERROR,
}

impl SyntaxKind {
    /// Whitespace and complete comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::WHITESPACE | SyntaxKind::LINE_COMMENT | SyntaxKind::BLOCK_COMMENT
        )
    }

    /// A literal or comment that was cut off by the end of the input.
    pub fn is_unterminated(self) -> bool {
        matches!(
            self,
            SyntaxKind::UNTERMINATED_STRING
                | SyntaxKind::UNTERMINATED_COMMENT
                | SyntaxKind::UNTERMINATED_REGEX
        )
    }

    /// Tokens after which a fresh expression may start.
    ///
    /// A cursor placed right after one of these (ignoring trivia) has nothing
    /// typed yet.
    pub fn starts_expression(self) -> bool {
        matches!(
            self,
            SyntaxKind::L_PAREN
                | SyntaxKind::L_BRACKET
                | SyntaxKind::L_BRACE
                | SyntaxKind::R_BRACE
                | SyntaxKind::SEMICOLON
                | SyntaxKind::COMMA
                | SyntaxKind::OPERATOR
        )
    }
}
