//! # Item Store
//!
//! The shopping list itself: an append-only, insertion-ordered sequence of
//! entries. There is no edit or delete. Duplicates are allowed.

use std::fmt;

/// A single entry on the list. Only ever constructed through
/// [`ItemStore::add`], so the text is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem(String);

impl ShoppingItem {
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Default, Clone)]
pub struct ItemStore {
    items: Vec<ShoppingItem>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` exactly as typed unless it is blank.
    ///
    /// Returns `true` if an item was appended. Blank input is silently
    /// ignored; callers are not expected to surface anything to the user.
    pub fn add(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.items.push(ShoppingItem(text.to_string()));
        true
    }

    pub fn as_slice(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ShoppingItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter()
    }
}
