//! # Application State
//!
//! Core business state for shoplist. This module contains domain logic only,
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── items: ItemStore          // the shopping list (append-only)
//! ├── query: String             // search box contents
//! ├── visible: Vec<usize>       // cached filter result, indices into items
//! ├── nav: NavState             // route, back stack, drawer
//! └── config: ResolvedConfig    // title, fade, profile card
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! `visible` is recomputed there after every item or query change, so it is
//! always consistent with `items` and `query` when a frame is drawn.

use crate::core::config::ResolvedConfig;
use crate::core::filter;
use crate::core::items::{ItemStore, ShoppingItem};
use crate::core::nav::{NavState, Route};

pub struct App {
    pub(crate) items: ItemStore,
    pub(crate) query: String,
    visible: Vec<usize>,
    pub nav: NavState,
    pub config: ResolvedConfig,
}

impl App {
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            items: ItemStore::new(),
            query: String::new(),
            visible: Vec::new(),
            nav: NavState::new(),
            config,
        }
    }

    /// Recompute the filtered view from `items` and `query`.
    pub(crate) fn refilter(&mut self) {
        self.visible = filter::matching_indices(self.items.as_slice(), &self.query);
    }

    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The filtered view, in list order.
    pub fn visible_items(&self) -> Vec<&ShoppingItem> {
        self.visible
            .iter()
            .filter_map(|&index| self.items.get(index))
            .collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn route(&self) -> Route {
        self.nav.current()
    }

    /// Top bar title for the current route.
    pub fn title(&self) -> &str {
        match self.nav.current() {
            Route::Home => &self.config.title,
            other => other.label(),
        }
    }
}
