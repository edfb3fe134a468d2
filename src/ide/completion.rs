//! Completion suggestions implementation.

use std::sync::Arc;

use crate::base::remainder;
use crate::schema::{FieldDescription, FieldKind};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum CompletionKind {
    /// A callable operation of an API type.
    Method,
    /// A plain value, either declared or observed at runtime.
    Field,
    /// A template snippet.
    Snippet,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Method => 2,   // Method
            CompletionKind::Field => 5,    // Field
            CompletionKind::Snippet => 15, // Snippet
        }
    }
}

impl From<FieldKind> for CompletionKind {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Method => CompletionKind::Method,
            FieldKind::Property => CompletionKind::Field,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletionItem {
    /// The full candidate name.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Text the editor appends at the cursor.
    pub insert_text: Arc<str>,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
    /// Where the cursor goes inside `insert_text` after insertion. `None`
    /// leaves it after the inserted text.
    pub cursor_offset: Option<usize>,
}

impl CompletionItem {
    /// Create a new completion item inserting `insert_text`.
    pub fn new(
        label: impl Into<Arc<str>>,
        kind: CompletionKind,
        insert_text: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            label: label.into(),
            kind,
            insert_text: insert_text.into(),
            detail: None,
            documentation: None,
            cursor_offset: None,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Set where the cursor lands inside the inserted text.
    pub fn with_cursor_offset(mut self, offset: usize) -> Self {
        self.cursor_offset = Some(offset);
        self
    }

    /// Create from a schema field the user has typed `prefix` of.
    pub fn from_field(field: &FieldDescription, prefix: &str) -> Self {
        let mut item = Self::new(
            field.name.as_str(),
            field.kind.into(),
            remainder(&field.name, prefix),
        )
        .with_detail(field.declared_type.as_str());

        if let Some(ref doc) = field.doc {
            item.documentation = Some(doc.clone());
        }

        item
    }

    /// Label decorated with the kind marker: `count()` for operations,
    /// `find(T)` for templates.
    pub fn display_label(&self) -> String {
        match self.kind {
            CompletionKind::Method => format!("{}()", self.label),
            CompletionKind::Field => self.label.to_string(),
            CompletionKind::Snippet => format!("{}(T)", self.label),
        }
    }
}
