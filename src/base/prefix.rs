//! Sorted-range prefix search shared by every completion source.

use std::collections::BTreeMap;
use std::ops::Bound;

use smol_str::SmolStr;

/// Iterate over every entry of `map` whose key starts with `prefix`, in
/// ascending key order.
///
/// Keys sharing a prefix are contiguous in a sorted map and the first of them
/// is the smallest key `>= prefix`, so this is a range query cut off at the
/// first key that no longer matches.
pub fn prefix_range<'m, 'p, V>(
    map: &'m BTreeMap<SmolStr, V>,
    prefix: &'p str,
) -> impl Iterator<Item = (&'m SmolStr, &'m V)> {
    map.range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
        .take_while(move |(key, _)| key.starts_with(prefix))
}

/// The part of `name` left to insert after the typed `prefix`.
///
/// Callers only pass names that start with `prefix`; anything else yields the
/// whole name.
pub fn remainder<'n>(name: &'n str, prefix: &str) -> &'n str {
    name.strip_prefix(prefix).unwrap_or(name)
}
