//! # Filter Engine
//!
//! Pure functions deriving the visible part of the list from a search query.
//! Matching is a case-insensitive substring test; order is preserved and
//! nothing is ranked.

use crate::core::items::ShoppingItem;

/// Returns true when `query` should not filter anything.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Indices into `items` of the entries matching `query`, ascending.
pub fn matching_indices(items: &[ShoppingItem], query: &str) -> Vec<usize> {
    if is_blank(query) {
        return (0..items.len()).collect();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.text().to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

/// The subsequence of `items` matching `query`.
pub fn filter<'a>(items: &'a [ShoppingItem], query: &str) -> Vec<&'a ShoppingItem> {
    matching_indices(items, query)
        .into_iter()
        .map(|index| &items[index])
        .collect()
}
