//! Resolution of a member chain to schema suggestions.

use std::borrow::Cow;

use tracing::trace;

use super::completion::CompletionItem;
use crate::parser::Path;
use crate::schema::{SchemaTable, StaticSchema, TypeSchema, join};

/// Get schema suggestions for `path`.
///
/// Every segment but the last is looked up by exact name, starting from the
/// root bindings and continuing through the declared type of each match. At
/// each step the static and `dynamic` views of that type are joined, dynamic
/// fields winning on name conflicts. The last segment is the prefix filter for
/// the final mapping.
///
/// # Returns
/// Suggestions in name order; empty when any intermediate segment is unknown.
pub fn resolve(schema: &StaticSchema, path: &Path, dynamic: &SchemaTable) -> Vec<CompletionItem> {
    if path.is_empty() {
        return Vec::new();
    }

    if path.is_root_query() {
        return schema
            .roots()
            .iter()
            .map(|field| CompletionItem::from_field(field, ""))
            .collect();
    }

    let Some(mapping) = walk(schema, path, dynamic) else {
        return Vec::new();
    };
    let prefix = path.last().unwrap_or_default();

    mapping
        .with_prefix(prefix)
        .map(|field| CompletionItem::from_field(field, prefix))
        .collect()
}

/// Follow the parent segments of `path` to the mapping its last segment is
/// completed against.
fn walk<'a>(
    schema: &'a StaticSchema,
    path: &Path,
    dynamic: &'a SchemaTable,
) -> Option<Cow<'a, TypeSchema>> {
    let mut current = Cow::Borrowed(schema.roots());

    for segment in path.parents() {
        let Some(field) = current.get(segment) else {
            trace!(%segment, %path, "unknown path segment");
            return None;
        };
        let declared = field.declared_type.clone();

        let Some(next) = join(schema.type_schema(&declared), dynamic.get(&declared)) else {
            trace!(%segment, type_id = %declared, "declared type has no fields");
            return None;
        };
        current = next;
    }

    Some(current)
}
