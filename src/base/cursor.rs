use text_size::TextSize;

/// A cursor position inside an editor buffer.
///
/// The offset is in bytes and always lies on a UTF-8 character boundary of
/// the buffer it was created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor {
    offset: TextSize,
}

impl Cursor {
    /// Validate `offset` against `text`.
    ///
    /// Returns `None` when the offset lies past the end of the buffer or
    /// splits a multi-byte character.
    pub fn new(text: &str, offset: usize) -> Option<Self> {
        if offset > text.len() || !text.is_char_boundary(offset) {
            return None;
        }
        let offset = TextSize::try_from(offset).ok()?;
        Some(Self { offset })
    }

    /// Cursor placed after the last character of `text`.
    pub fn at_end(text: &str) -> Option<Self> {
        Self::new(text, text.len())
    }

    pub fn offset(&self) -> TextSize {
        self.offset
    }

    /// The part of `text` before the cursor. Nothing past the cursor is ever
    /// considered when completing.
    pub fn prefix<'a>(&self, text: &'a str) -> &'a str {
        &text[..usize::from(self.offset)]
    }
}
