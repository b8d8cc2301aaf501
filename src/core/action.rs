//! # Actions
//!
//! Everything that can happen in shoplist becomes an `Action`.
//! User presses Enter in the item box? That's `Action::AddItem(text)`.
//! User picks Settings in the drawer? That's `Action::DrawerSelect(Route::Settings)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the event loop whether to keep
//! going. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::debug;

use crate::core::nav::Route;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append an item; blank text is ignored.
    AddItem(String),
    /// The search box now holds this text.
    QueryChanged(String),
    /// Bottom bar tap.
    NavigateTo(Route),
    /// Drawer entry tap: navigate, then close the drawer.
    DrawerSelect(Route),
    OpenDrawer,
    CloseDrawer,
    /// Move the current route's scroll offset by this many rows.
    Scroll(isize),
    /// Platform back: close drawer, else pop, else exit.
    Back,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} on {}", action, app.route());
    match action {
        Action::AddItem(text) => {
            if app.items.add(&text) {
                app.refilter();
                debug!("Item added, list has {} entries", app.items.len());
            }
            Effect::None
        }
        Action::QueryChanged(query) => {
            if app.query != query {
                app.query = query;
                app.refilter();
            }
            Effect::None
        }
        Action::NavigateTo(route) => {
            app.nav.navigate(route);
            Effect::None
        }
        Action::DrawerSelect(route) => {
            app.nav.navigate(route);
            app.nav.close_drawer();
            Effect::None
        }
        Action::OpenDrawer => {
            app.nav.open_drawer();
            Effect::None
        }
        Action::CloseDrawer => {
            app.nav.close_drawer();
            Effect::None
        }
        Action::Scroll(delta) => {
            let state = app.nav.current_state_mut();
            state.scroll = state.scroll.saturating_add_signed(delta);
            Effect::None
        }
        Action::Back => {
            if app.nav.drawer_open() {
                app.nav.close_drawer();
                Effect::None
            } else if app.nav.pop() {
                Effect::None
            } else {
                Effect::Quit
            }
        }
        Action::Quit => Effect::Quit,
    }
}
