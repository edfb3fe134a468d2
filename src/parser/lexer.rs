//! Logos-based lexer for console scripts
//!
//! Tokenizes possibly unfinished JavaScript-like input. Strings and comments
//! that run into the end of the input are reported with their own kinds
//! instead of failing, so the extractor can tell when the cursor sits inside
//! one.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
///
/// A `/` that starts an expression opens a regex literal. Logos cannot tell
/// that from division, so the wrapper tracks the previous significant token
/// and extends the slash over the literal itself.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
    prev: Option<SyntaxKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
            prev: None,
        }
    }

    fn regex_allowed(&self) -> bool {
        self.prev.is_none_or(SyntaxKind::starts_expression)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;

        let mut kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };
        if kind == SyntaxKind::OPERATOR && self.inner.slice() == "/" && self.regex_allowed() {
            if let Some((len, regex_kind)) = scan_regex(self.inner.remainder()) {
                self.inner.bump(len);
                kind = regex_kind;
            }
        }

        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;
        if !kind.is_trivia() {
            self.prev = Some(kind);
        }

        Some(Token { kind, text, offset })
    }
}

/// Length of a regex literal body and flags after its opening `/`.
///
/// `None` when the line ends before the closing `/`: regex literals never
/// span lines, so the slash was an operator after all.
fn scan_regex(rest: &str) -> Option<(usize, SyntaxKind)> {
    let mut in_class = false;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        match c {
            '\n' | '\r' => return None,
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => {
                let body = i + 1;
                let flags = rest[body..]
                    .find(|c: char| !unicode_ident::is_xid_continue(c))
                    .unwrap_or(rest.len() - body);
                return Some((body + flags, SyntaxKind::REGEX));
            }
            _ => {}
        }
    }
    Some((rest.len(), SyntaxKind::UNTERMINATED_REGEX))
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\**")]
    UnterminatedComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[\p{XID_Start}_$][\p{XID_Continue}$]*")]
    Ident,

    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r#""([^"\\\n]|\\(.|\n))*""#)]
    #[regex(r"'([^'\\\n]|\\(.|\n))*'")]
    #[regex(r"`([^`\\]|\\(.|\n))*`")]
    String,

    #[regex(r#""([^"\\\n]|\\(.|\n))*\\?"#)]
    #[regex(r"'([^'\\\n]|\\(.|\n))*\\?")]
    #[regex(r"`([^`\\]|\\(.|\n))*\\?")]
    UnterminatedString,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token(".")]
    Dot,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[regex(r"[=+\-*/?:!<>&|^%~@#]")]
    Operator,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,
            UnterminatedComment => SyntaxKind::UNTERMINATED_COMMENT,
            // Literals
            Ident => SyntaxKind::IDENT,
            Number => SyntaxKind::NUMBER,
            String => SyntaxKind::STRING,
            UnterminatedString => SyntaxKind::UNTERMINATED_STRING,
            // Punctuation
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            Dot => SyntaxKind::DOT,
            Semicolon => SyntaxKind::SEMICOLON,
            Comma => SyntaxKind::COMMA,
            Operator => SyntaxKind::OPERATOR,
        }
    }
}
