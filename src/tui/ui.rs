use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

use crate::core::nav::Route;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    BottomBar, Drawer, HomeScreen, ProfileScreen, SettingsScreen, TopBar,
};
use crate::tui::{HomeFocus, TuiState};

/// Where the shell pieces go for a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub top: Rect,
    pub main: Rect,
    pub bottom: Option<Rect>,
}

pub fn shell_layout(area: Rect, show_bottom_bar: bool) -> ShellLayout {
    use Constraint::{Length, Min};
    let bottom_height = if show_bottom_bar { 1 } else { 0 };
    let [top, main, bottom] =
        Layout::vertical([Length(1), Min(0), Length(bottom_height)]).areas(area);
    ShellLayout {
        top,
        main: main.inner(Margin::new(1, 0)),
        bottom: show_bottom_bar.then_some(bottom),
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    let layout = shell_layout(frame.area(), app.nav.shows_bottom_bar());
    let drawer_open = app.nav.drawer_open();

    // Sync InputBox props with TUI state
    tui.item_input.focused = !drawer_open && tui.focus == HomeFocus::ItemInput;
    tui.search_input.focused = !drawer_open && tui.focus == HomeFocus::Search;

    TopBar::new(app.title(), drawer_open).render(frame, layout.top);

    let style = tui.fade.style(now);
    let scroll = app.nav.current_state().scroll;
    match app.route() {
        Route::Home => {
            let mut screen = HomeScreen {
                items: app.visible_items(),
                total: app.items().len(),
                query: app.query(),
                item_input: &mut tui.item_input,
                search_input: &mut tui.search_input,
                list_focused: !drawer_open && tui.focus == HomeFocus::List,
                scroll,
                style,
            };
            screen.render(frame, layout.main);
        }
        Route::Profile => {
            ProfileScreen::new(&app.config.profile, scroll, style).render(frame, layout.main);
        }
        Route::Settings => {
            SettingsScreen::new(&app.config, scroll, style).render(frame, layout.main);
        }
    }

    if let Some(bottom) = layout.bottom {
        BottomBar::new(app.route()).render(frame, bottom);
    }

    if drawer_open {
        Drawer::new(&mut tui.drawer).render(frame, frame.area());
    }
}

/// Largest scroll offset that still shows content on the current route.
pub fn scroll_limit(app: &App, frame_area: Rect) -> usize {
    let main = shell_layout(frame_area, app.nav.shows_bottom_bar()).main;
    match app.route() {
        Route::Home => app.visible_len().saturating_sub(HomeScreen::list_rows(main)),
        Route::Profile => ProfileScreen::scroll_limit(&app.config.profile, main),
        Route::Settings => SettingsScreen::scroll_limit(&app.config, main),
    }
}

/// Rows moved by PageUp/PageDown on the current route.
pub fn page_size(app: &App, frame_area: Rect) -> usize {
    let main = shell_layout(frame_area, app.nav.shows_bottom_bar()).main;
    match app.route() {
        Route::Home => HomeScreen::list_rows(main),
        _ => main.height as usize,
    }
    .max(1)
}

/// Which Home field sits under a click, if any.
pub fn home_focus_at(frame_area: Rect, x: u16, y: u16) -> Option<HomeFocus> {
    let main = shell_layout(frame_area, Route::Home.shows_bottom_bar()).main;
    let [_, item_area, search_area, list_area] = HomeScreen::areas(main);
    let contains = |r: Rect| x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height;
    if contains(item_area) {
        Some(HomeFocus::ItemInput)
    } else if contains(search_area) {
        Some(HomeFocus::Search)
    } else if contains(list_area) {
        Some(HomeFocus::List)
    } else {
        None
    }
}
