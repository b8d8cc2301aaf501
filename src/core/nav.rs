//! # Navigation State Machine
//!
//! Tracks which screen is showing, the back stack that got us there, and
//! whether the side drawer is open.
//!
//! ```text
//!   back stack          saved (popped routes)
//!   ┌──────────┐        ┌──────────────────────┐
//!   │ Profile  │ ─pop─▶ │ Profile → RouteState │
//!   ├──────────┤        └──────────────────────┘
//!   │ Home     │  ← start destination, never popped by navigate()
//!   └──────────┘
//! ```
//!
//! Every navigation pops back to Home (saving the state of whatever it
//! pops), then pushes the target with its saved state restored. Navigating
//! to the route already on top is a no-op, so the stack is always either
//! `[Home]` or `[Home, X]`.

use std::collections::HashMap;
use std::fmt;

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Profile,
    Settings,
}

impl Route {
    /// Routes reachable from the bottom bar, in display order.
    pub const BOTTOM_BAR: [Route; 2] = [Route::Home, Route::Profile];
    /// Routes listed in the drawer, in display order.
    pub const DRAWER: [Route; 1] = [Route::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Profile => "Profile",
            Route::Settings => "Settings",
        }
    }

    pub fn shows_bottom_bar(self) -> bool {
        Self::BOTTOM_BAR.contains(&self)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-route state that survives being popped by a navigation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RouteState {
    pub scroll: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BackStackEntry {
    route: Route,
    state: RouteState,
}

impl BackStackEntry {
    fn new(route: Route, state: RouteState) -> Self {
        Self { route, state }
    }
}

#[derive(Debug, Clone)]
pub struct NavState {
    back_stack: Vec<BackStackEntry>,
    saved: HashMap<Route, RouteState>,
    drawer_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    pub const START: Route = Route::Home;

    pub fn new() -> Self {
        Self {
            back_stack: vec![BackStackEntry::new(Self::START, RouteState::default())],
            saved: HashMap::new(),
            drawer_open: false,
        }
    }

    pub fn current(&self) -> Route {
        self.top().route
    }

    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.back_stack.iter().map(|e| e.route).collect()
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn shows_bottom_bar(&self) -> bool {
        self.current().shows_bottom_bar()
    }

    pub fn current_state(&self) -> RouteState {
        self.top().state
    }

    pub fn current_state_mut(&mut self) -> &mut RouteState {
        let top = self.back_stack.len() - 1;
        &mut self.back_stack[top].state
    }

    /// Single-top navigation with pop-up-to-start, save and restore.
    ///
    /// Returns `true` if the current route changed. The drawer is left as is.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.current() == route {
            debug!("navigate({route}): already on top, depth {}", self.depth());
            return false;
        }

        while self.back_stack.len() > 1 {
            if let Some(entry) = self.back_stack.pop() {
                self.saved.insert(entry.route, entry.state);
            }
        }

        if route != Self::START {
            let state = self.saved.remove(&route).unwrap_or_default();
            self.back_stack.push(BackStackEntry::new(route, state));
        }

        debug!("navigate({route}): stack now {:?}", self.routes());
        true
    }

    /// Pops the top entry without saving its state.
    ///
    /// Returns `false` when only the start destination is left.
    pub fn pop(&mut self) -> bool {
        if self.back_stack.len() <= 1 {
            return false;
        }
        if let Some(entry) = self.back_stack.pop() {
            self.saved.remove(&entry.route);
            debug!("pop({}): stack now {:?}", entry.route, self.routes());
        }
        true
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    fn top(&self) -> &BackStackEntry {
        // The start entry is never popped, so the stack is never empty.
        &self.back_stack[self.back_stack.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = NavState::new();
        assert_eq!(nav.current(), Route::Home);
        assert!(!nav.drawer_open());
        assert_eq!(nav.depth(), 1);
        assert!(nav.shows_bottom_bar());
    }

    #[test]
    fn test_navigate_to_current_route_keeps_depth() {
        let mut nav = NavState::new();
        assert!(!nav.navigate(Route::Home));
        assert_eq!(nav.depth(), 1);

        assert!(nav.navigate(Route::Profile));
        let depth = nav.depth();
        assert!(!nav.navigate(Route::Profile));
        assert!(!nav.navigate(Route::Profile));
        assert_eq!(nav.depth(), depth);
    }

    #[test]
    fn test_stack_never_grows_past_two() {
        let mut nav = NavState::new();
        for route in [Route::Profile, Route::Settings, Route::Profile, Route::Home, Route::Settings] {
            nav.navigate(route);
            assert!(nav.depth() <= 2);
            assert_eq!(nav.routes()[0], Route::Home);
            assert_eq!(nav.current(), route);
        }
        assert_eq!(nav.routes(), vec![Route::Home, Route::Settings]);
    }

    #[test]
    fn test_navigate_home_pops_to_start() {
        let mut nav = NavState::new();
        nav.navigate(Route::Settings);
        assert!(nav.navigate(Route::Home));
        assert_eq!(nav.routes(), vec![Route::Home]);
    }

    #[test]
    fn test_saved_state_restored_on_return() {
        let mut nav = NavState::new();
        nav.navigate(Route::Profile);
        nav.current_state_mut().scroll = 7;

        nav.navigate(Route::Home);
        assert_eq!(nav.current_state(), RouteState::default());

        nav.navigate(Route::Profile);
        assert_eq!(nav.current_state().scroll, 7);
    }

    #[test]
    fn test_home_state_kept_while_elsewhere() {
        let mut nav = NavState::new();
        nav.current_state_mut().scroll = 3;
        nav.navigate(Route::Profile);
        nav.navigate(Route::Settings);
        nav.navigate(Route::Home);
        assert_eq!(nav.current_state().scroll, 3);
    }

    #[test]
    fn test_state_saved_per_route() {
        let mut nav = NavState::new();
        nav.navigate(Route::Profile);
        nav.current_state_mut().scroll = 2;
        nav.navigate(Route::Settings);
        nav.current_state_mut().scroll = 5;

        nav.navigate(Route::Profile);
        assert_eq!(nav.current_state().scroll, 2);
        nav.navigate(Route::Settings);
        assert_eq!(nav.current_state().scroll, 5);
    }

    #[test]
    fn test_pop_discards_state() {
        let mut nav = NavState::new();
        nav.navigate(Route::Profile);
        nav.current_state_mut().scroll = 4;

        assert!(nav.pop());
        assert_eq!(nav.current(), Route::Home);

        nav.navigate(Route::Profile);
        assert_eq!(nav.current_state().scroll, 0);
    }

    #[test]
    fn test_pop_at_start_is_refused() {
        let mut nav = NavState::new();
        assert!(!nav.pop());
        assert_eq!(nav.current(), Route::Home);
    }

    #[test]
    fn test_navigation_leaves_drawer_alone() {
        let mut nav = NavState::new();
        nav.open_drawer();
        nav.navigate(Route::Profile);
        assert!(nav.drawer_open());
        nav.close_drawer();
        nav.navigate(Route::Home);
        assert!(!nav.drawer_open());
    }

    #[test]
    fn test_bottom_bar_visibility() {
        assert!(Route::Home.shows_bottom_bar());
        assert!(Route::Profile.shows_bottom_bar());
        assert!(!Route::Settings.shows_bottom_bar());
    }
}
