//! Template snippets with prefix search.

use std::collections::BTreeMap;
use std::sync::Arc;

use smol_str::SmolStr;

use super::completion::{CompletionItem, CompletionKind};
use crate::base::prefix_range;

/// Marks where the cursor should land inside a template body.
pub const CURSOR_MARKER: &str = "$0";

/// A named snippet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateEntry {
    pub name: SmolStr,
    /// Body inserted verbatim, with the cursor marker removed.
    pub body: Arc<str>,
    /// Byte offset into `body` where the cursor goes after insertion.
    pub cursor_offset: usize,
}

impl TemplateEntry {
    /// Create an entry from a raw body.
    ///
    /// The first [`CURSOR_MARKER`] in `raw_body` is removed and its position
    /// becomes the cursor offset; without a marker the cursor goes to the
    /// start of the body.
    pub fn new(name: &str, raw_body: &str) -> Self {
        let (body, cursor_offset) = match raw_body.find(CURSOR_MARKER) {
            Some(at) => {
                let mut body = String::with_capacity(raw_body.len() - CURSOR_MARKER.len());
                body.push_str(&raw_body[..at]);
                body.push_str(&raw_body[at + CURSOR_MARKER.len()..]);
                (body, at)
            }
            None => (raw_body.to_string(), 0),
        };
        Self {
            name: SmolStr::new(name),
            body: Arc::from(body),
            cursor_offset,
        }
    }

    fn to_completion(&self) -> CompletionItem {
        CompletionItem::new(self.name.as_str(), CompletionKind::Snippet, self.body.clone())
            .with_cursor_offset(self.cursor_offset)
    }
}

/// Sorted table of named snippets.
///
/// Populated once at startup (see `project::template_loader`) and read-only
/// afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateIndex {
    entries: BTreeMap<SmolStr, TemplateEntry>,
}

impl TemplateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template, replacing any template with the same name.
    pub fn insert(&mut self, entry: TemplateEntry) -> Option<TemplateEntry> {
        self.entries.insert(entry.name.clone(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&TemplateEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Templates whose name starts with `prefix`, in name order.
    pub fn matching<'s>(&'s self, prefix: &str) -> impl Iterator<Item = &'s TemplateEntry> {
        prefix_range(&self.entries, prefix).map(|(_, entry)| entry)
    }

    /// Snippet suggestions for `prefix`.
    ///
    /// Unlike schema suggestions the insert text is the whole body: a snippet
    /// replaces what was typed rather than completing it.
    pub fn find(&self, prefix: &str) -> Vec<CompletionItem> {
        self.matching(prefix).map(TemplateEntry::to_completion).collect()
    }
}

impl FromIterator<TemplateEntry> for TemplateIndex {
    fn from_iter<I: IntoIterator<Item = TemplateEntry>>(iter: I) -> Self {
        let mut index = TemplateIndex::new();
        for entry in iter {
            index.insert(entry);
        }
        index
    }
}
