//! Extraction of the member chain that ends at the cursor.
//!
//! The extractor never builds a syntax tree. It tokenizes the buffer up to the
//! cursor and walks the significant tokens backwards, collecting identifiers
//! joined by member-access dots. Call argument lists are skipped as balanced
//! spans, so whatever is written inside them never leaks into the chain.

use std::fmt;

use smol_str::SmolStr;
use tracing::trace;

use super::lexer::{Token, tokenize};
use super::syntax_kind::SyntaxKind;
use crate::base::Cursor;

/// An ordered chain of path segments ending at the cursor.
///
/// `db.getCollection('x').fi` becomes `[db, getCollection, fi]`. The last
/// segment is the (possibly empty) prefix the user is typing; an empty last
/// segment means nothing has been typed at that position yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<SmolStr>,
}

impl Path {
    /// The single-segment path `[""]`: nothing typed at top level.
    pub fn root() -> Self {
        Self {
            segments: vec![SmolStr::default()],
        }
    }

    pub fn segments(&self) -> &[SmolStr] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment being typed at the cursor.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(SmolStr::as_str)
    }

    /// Every segment before the one being typed.
    pub fn parents(&self) -> &[SmolStr] {
        match self.segments.split_last() {
            Some((_, parents)) => parents,
            None => &[],
        }
    }

    /// True for `[""]`, the request to list every root binding.
    pub fn is_root_query(&self) -> bool {
        matches!(self.segments.as_slice(), [only] if only.is_empty())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(SmolStr::new).collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Extract the member chain that ends at `cursor` (a byte offset into `text`).
///
/// Returns `None` when no chain touches the cursor: the cursor is inside a
/// comment or an unterminated string or regex, directly after a literal,
/// separated from the last identifier by whitespace, or the chain is
/// malformed (for example an unbalanced closing parenthesis). Never fails
/// otherwise.
///
/// # Example
/// ```
/// use shellhint::parser::extract_path;
///
/// let path = extract_path("foo(); db.getCollection(x.name).co", 34).unwrap();
/// assert_eq!(path.to_string(), "db.getCollection.co");
/// ```
pub fn extract_path(text: &str, cursor: usize) -> Option<Path> {
    let Some(cursor) = Cursor::new(text, cursor) else {
        trace!(cursor, len = text.len(), "cursor outside of buffer");
        return None;
    };
    let tokens = tokenize(cursor.prefix(text));
    ChainScanner::new(&tokens).scan()
}

/// Walks tokens backwards from the cursor.
struct ChainScanner<'t, 'a> {
    tokens: &'t [Token<'a>],
    /// Tokens at index `pos` and above have been consumed.
    pos: usize,
    /// Segments in reverse order.
    segments: Vec<SmolStr>,
}

impl<'t, 'a> ChainScanner<'t, 'a> {
    fn new(tokens: &'t [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: tokens.len(),
            segments: Vec::new(),
        }
    }

    fn scan(mut self) -> Option<Path> {
        let tokens = self.tokens;
        if let Some(last) = tokens.last() {
            if last.kind.is_unterminated() {
                trace!(kind = ?last.kind, "cursor inside unterminated token");
                return None;
            }
            // A line comment runs to the end of its line, so it can only be
            // last when the cursor is inside it.
            if last.kind == SyntaxKind::LINE_COMMENT {
                trace!("cursor inside line comment");
                return None;
            }
            if last.kind == SyntaxKind::IDENT {
                self.pos -= 1;
                self.segments.push(SmolStr::new(last.text));
                return self.scan_parents();
            }
        }

        match self.prev_significant() {
            None => Some(Path::root()),
            Some(token) if token.kind == SyntaxKind::DOT => {
                self.segments.push(SmolStr::default());
                self.scan_member()
            }
            Some(token) if token.kind.starts_expression() => Some(Path::root()),
            Some(token) => {
                trace!(kind = ?token.kind, text = token.text, "no chain touches the cursor");
                None
            }
        }
    }

    /// After a segment: continue while the previous token is a member dot.
    fn scan_parents(mut self) -> Option<Path> {
        loop {
            let before = self.pos;
            match self.prev_significant() {
                Some(token) if token.kind == SyntaxKind::DOT => {}
                _ => {
                    self.pos = before;
                    return Some(self.finish());
                }
            }
            self = self.scan_member_step()?;
        }
    }

    /// After a dot: a member must precede it.
    fn scan_member(self) -> Option<Path> {
        self.scan_member_step()?.scan_parents()
    }

    fn scan_member_step(mut self) -> Option<Self> {
        let token = self.prev_significant()?;
        match token.kind {
            SyntaxKind::IDENT => {
                self.segments.push(SmolStr::new(token.text));
                Some(self)
            }
            SyntaxKind::R_PAREN => {
                self.skip_arguments()?;
                match self.prev_significant() {
                    Some(callee) if callee.kind == SyntaxKind::IDENT => {
                        self.segments.push(SmolStr::new(callee.text));
                        Some(self)
                    }
                    _ => {
                        trace!("parenthesized expression is not a call");
                        None
                    }
                }
            }
            kind => {
                trace!(?kind, text = token.text, "member access on unsupported expression");
                None
            }
        }
    }

    /// Skip backwards over a call argument list whose `)` was just consumed.
    fn skip_arguments(&mut self) -> Option<()> {
        let mut depth = 1usize;
        while self.pos > 0 {
            self.pos -= 1;
            match self.tokens[self.pos].kind {
                SyntaxKind::R_PAREN => depth += 1,
                SyntaxKind::L_PAREN => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(());
                    }
                }
                kind if kind.is_unterminated() => {
                    trace!("unterminated token inside call arguments");
                    return None;
                }
                _ => {}
            }
        }
        trace!("unbalanced parenthesis in call arguments");
        None
    }

    fn prev_significant(&mut self) -> Option<&'t Token<'a>> {
        let tokens = self.tokens;
        while self.pos > 0 {
            self.pos -= 1;
            let token = &tokens[self.pos];
            if !token.kind.is_trivia() {
                return Some(token);
            }
        }
        None
    }

    fn finish(mut self) -> Path {
        self.segments.reverse();
        Path {
            segments: self.segments,
        }
    }
}
