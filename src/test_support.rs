//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// Creates a test App with built-in defaults.
pub fn test_app() -> App {
    App::new(ResolvedConfig::default())
}

/// Creates a test App with the given items already added.
pub fn test_app_with_items(items: &[&str]) -> App {
    let mut app = test_app();
    for item in items {
        update(&mut app, Action::AddItem(item.to_string()));
    }
    app
}
