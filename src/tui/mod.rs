//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop redraws only when something changed:
//!
//! - **Fading** (a screen just became visible): draws every ~50ms until the
//!   fade finishes.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! All pending events are drained before the next draw, so a burst of
//! keystrokes (or a paste) costs one frame.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::nav::Route;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{BottomBar, DrawerEvent, DrawerState, FadeIn, InputBox, InputEvent, TopBar};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const FRAME_INTERVAL: Duration = Duration::from_millis(50);
const IDLE_INTERVAL: Duration = Duration::from_millis(500);

/// Which Home field receives typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    ItemInput,
    Search,
    List,
}

impl HomeFocus {
    pub fn next(self) -> Self {
        match self {
            HomeFocus::ItemInput => HomeFocus::Search,
            HomeFocus::Search => HomeFocus::List,
            HomeFocus::List => HomeFocus::ItemInput,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            HomeFocus::ItemInput => HomeFocus::List,
            HomeFocus::Search => HomeFocus::ItemInput,
            HomeFocus::List => HomeFocus::Search,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub item_input: InputBox,
    pub search_input: InputBox,
    pub focus: HomeFocus,
    pub drawer: DrawerState,
    pub fade: FadeIn,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            item_input: InputBox::new("Add item", "e.g. Milk"),
            search_input: InputBox::new("Search", "type to filter"),
            focus: HomeFocus::ItemInput, // User expects to type immediately
            drawer: DrawerState::new(),
            fade: FadeIn::new(Duration::from_millis(config.fade_ms)),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new(&app.config);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    info!("Exiting with {} items on the list", app.items().len());
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> std::io::Result<()> {
    tui.fade.restart(Instant::now());
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        let animating = tui.fade.is_running(now);

        if needs_redraw || animating {
            terminal.draw(|f| ui::draw_ui(f, app, tui, now))?;
            needs_redraw = false;
        }

        let timeout = if animating { FRAME_INTERVAL } else { IDLE_INTERVAL };
        let first_event = poll_event_timeout(timeout);
        let frame_area = terminal.get_frame().area();

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if handle_event(app, tui, event, frame_area, Instant::now()) == Effect::Quit {
                return Ok(());
            }
        }
    }
}

/// Route one terminal event to the drawer, the shell, or the current screen.
///
/// Restarts the fade when the visible route changes and keeps the current
/// route's scroll offset within what the screen can show.
pub fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: Rect,
    now: Instant,
) -> Effect {
    let before = app.route();
    let effect = dispatch(app, tui, event, frame_area);

    if app.route() != before {
        info!("Route changed: {} -> {}", before, app.route());
        tui.fade.restart(now);
    }

    let limit = ui::scroll_limit(app, frame_area);
    let scroll = app.nav.current_state().scroll;
    if scroll > limit {
        update(app, Action::Scroll(limit as isize - scroll as isize));
    }

    effect
}

fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent, frame_area: Rect) -> Effect {
    match event {
        TuiEvent::Resize => return Effect::None,
        // ForceQuit (Ctrl+C) always quits regardless of what has focus
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        _ => {}
    }

    // While the drawer is open it is modal
    if app.nav.drawer_open() {
        let drawer_event = match event {
            TuiEvent::MouseClick(x, y) => Some(tui.drawer.hit_test(frame_area, x, y)),
            other => tui.drawer.handle_event(&other),
        };
        return match drawer_event {
            Some(DrawerEvent::Select(route)) => update(app, Action::DrawerSelect(route)),
            Some(DrawerEvent::Dismiss) => update(app, Action::CloseDrawer),
            Some(DrawerEvent::Ignore) | None => Effect::None,
        };
    }

    let page = ui::page_size(app, frame_area) as isize;
    match event {
        TuiEvent::OpenDrawer => update(app, Action::OpenDrawer),
        TuiEvent::Escape => update(app, Action::Back),
        TuiEvent::Tab(index) => match Route::BOTTOM_BAR.get(index) {
            Some(&route) if app.nav.shows_bottom_bar() => update(app, Action::NavigateTo(route)),
            _ => Effect::None,
        },
        TuiEvent::MouseClick(x, y) => click(app, tui, frame_area, x, y),
        TuiEvent::ScrollUp => update(app, Action::Scroll(-1)),
        TuiEvent::ScrollDown => update(app, Action::Scroll(1)),
        TuiEvent::ScrollPageUp => update(app, Action::Scroll(-page)),
        TuiEvent::ScrollPageDown => update(app, Action::Scroll(page)),
        other => match app.route() {
            Route::Home => home_event(app, tui, other),
            Route::Profile | Route::Settings => match other {
                TuiEvent::CursorUp => update(app, Action::Scroll(-1)),
                TuiEvent::CursorDown => update(app, Action::Scroll(1)),
                _ => Effect::None,
            },
        },
    }
}

fn click(app: &mut App, tui: &mut TuiState, frame_area: Rect, x: u16, y: u16) -> Effect {
    let layout = ui::shell_layout(frame_area, app.nav.shows_bottom_bar());

    if TopBar::hits_menu_icon(layout.top, x, y) {
        return update(app, Action::OpenDrawer);
    }
    if let Some(bottom) = layout.bottom
        && let Some(route) = BottomBar::new(app.route()).hit_test(bottom, x, y)
    {
        return update(app, Action::NavigateTo(route));
    }
    if app.route() == Route::Home
        && let Some(focus) = ui::home_focus_at(frame_area, x, y)
    {
        debug!("Focus moved to {:?} by click", focus);
        tui.focus = focus;
    }
    Effect::None
}

fn home_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            return Effect::None;
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev();
            return Effect::None;
        }
        TuiEvent::CursorUp => return update(app, Action::Scroll(-1)),
        TuiEvent::CursorDown => return update(app, Action::Scroll(1)),
        _ => {}
    }

    match tui.focus {
        HomeFocus::ItemInput => match tui.item_input.handle_event(&event) {
            Some(InputEvent::Submit(text)) => update(app, Action::AddItem(text)),
            _ => Effect::None,
        },
        HomeFocus::Search => {
            if matches!(event, TuiEvent::Submit) {
                tui.focus = HomeFocus::List;
                return Effect::None;
            }
            search_event(app, tui, &event)
        }
        HomeFocus::List => match event {
            TuiEvent::Submit => {
                tui.focus = HomeFocus::ItemInput;
                Effect::None
            }
            // Typing auto-switches to the search box and forwards the event
            TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
                tui.focus = HomeFocus::Search;
                search_event(app, tui, &event)
            }
            _ => Effect::None,
        },
    }
}

fn search_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match tui.search_input.handle_event(event) {
        Some(InputEvent::ContentChanged) => {
            update(app, Action::QueryChanged(tui.search_input.buffer.clone()))
        }
        _ => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_app_with_items};

    const AREA: Rect = Rect::new(0, 0, 60, 20);

    fn send(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> Effect {
        let mut effect = Effect::None;
        for event in events {
            effect = handle_event(app, tui, event.clone(), AREA, Instant::now());
        }
        effect
    }

    fn typed(s: &str) -> Vec<TuiEvent> {
        s.chars().map(TuiEvent::InputChar).collect()
    }

    fn visible(app: &App) -> Vec<String> {
        app.visible_items().iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_typing_and_enter_adds_item() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app.config);

        let mut events = typed("Milk");
        events.push(TuiEvent::Submit);
        send(&mut app, &mut tui, &events);

        assert_eq!(visible(&app), vec!["Milk"]);
        assert!(tui.item_input.buffer.is_empty());
    }

    #[test]
    fn test_blank_enter_keeps_text_and_list() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app.config);

        let mut events = typed("   ");
        events.push(TuiEvent::Submit);
        send(&mut app, &mut tui, &events);

        assert!(app.items().is_empty());
        assert_eq!(tui.item_input.buffer, "   ");
    }

    #[test]
    fn test_search_filters_as_you_type() {
        let mut app = test_app_with_items(&["Milk", "Eggs", "milk chocolate"]);
        let mut tui = TuiState::new(&app.config);

        let mut events = vec![TuiEvent::FocusNext];
        events.extend(typed("milk"));
        send(&mut app, &mut tui, &events);

        assert_eq!(tui.focus, HomeFocus::Search);
        assert_eq!(app.query(), "milk");
        assert_eq!(visible(&app), vec!["Milk", "milk chocolate"]);

        send(&mut app, &mut tui, &vec![TuiEvent::Backspace; 4]);
        assert_eq!(visible(&app).len(), 3);
    }

    #[test]
    fn test_typing_in_list_jumps_to_search() {
        let mut app = test_app_with_items(&["Milk", "Eggs"]);
        let mut tui = TuiState::new(&app.config);
        tui.focus = HomeFocus::List;

        send(&mut app, &mut tui, &typed("egg"));
        assert_eq!(tui.focus, HomeFocus::Search);
        assert_eq!(visible(&app), vec!["Eggs"]);
    }

    #[test]
    fn test_drawer_settings_flow() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app.config);

        send(&mut app, &mut tui, &[TuiEvent::OpenDrawer]);
        assert!(app.nav.drawer_open());

        // Keys go to the drawer, not the item box
        send(&mut app, &mut tui, &[TuiEvent::InputChar('x'), TuiEvent::Submit]);
        assert!(tui.item_input.buffer.is_empty());
        assert_eq!(app.route(), Route::Settings);
        assert!(!app.nav.drawer_open());
        assert!(!app.nav.shows_bottom_bar());
        assert!(tui.fade.is_running(Instant::now()));
    }

    #[test]
    fn test_function_keys_ignored_on_settings() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app.config);
        update(&mut app, Action::DrawerSelect(Route::Settings));

        send(&mut app, &mut tui, &[TuiEvent::Tab(1)]);
        assert_eq!(app.route(), Route::Settings);

        send(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert_eq!(app.route(), Route::Home);

        send(&mut app, &mut tui, &[TuiEvent::Tab(1)]);
        assert_eq!(app.route(), Route::Profile);
    }

    #[test]
    fn test_clicks() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app.config);

        // Profile tab is the right half of the bottom row
        send(&mut app, &mut tui, &[TuiEvent::MouseClick(45, 19)]);
        assert_eq!(app.route(), Route::Profile);

        // Menu icon, then outside the drawer
        send(&mut app, &mut tui, &[TuiEvent::MouseClick(1, 0)]);
        assert!(app.nav.drawer_open());
        send(&mut app, &mut tui, &[TuiEvent::MouseClick(50, 10)]);
        assert!(!app.nav.drawer_open());
        assert_eq!(app.route(), Route::Profile);
    }

    #[test]
    fn test_click_focuses_home_fields() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app.config);
        send(&mut app, &mut tui, &[TuiEvent::MouseClick(5, 6)]);
        assert_eq!(tui.focus, HomeFocus::Search);
    }

    #[test]
    fn test_escape_on_home_quits() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app.config);
        assert_eq!(send(&mut app, &mut tui, &[TuiEvent::Escape]), Effect::Quit);
    }

    #[test]
    fn test_force_quit_works_with_drawer_open() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app.config);
        send(&mut app, &mut tui, &[TuiEvent::OpenDrawer]);
        assert_eq!(send(&mut app, &mut tui, &[TuiEvent::ForceQuit]), Effect::Quit);
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut app = test_app_with_items(&["a", "b", "c"]);
        let mut tui = TuiState::new(&app.config);
        send(&mut app, &mut tui, &[TuiEvent::ScrollPageDown, TuiEvent::ScrollDown]);
        assert_eq!(app.nav.current_state().scroll, 0);
    }

    #[test]
    fn test_narrowing_search_pulls_scroll_back() {
        let texts: Vec<String> = (0..30).map(|i| format!("item {i}")).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let mut app = test_app_with_items(&refs);
        let mut tui = TuiState::new(&app.config);

        send(&mut app, &mut tui, &[TuiEvent::ScrollPageDown, TuiEvent::ScrollPageDown]);
        assert_eq!(app.nav.current_state().scroll, 18);

        let mut events = vec![TuiEvent::FocusNext];
        events.extend(typed("item 2"));
        send(&mut app, &mut tui, &events);
        assert_eq!(app.nav.current_state().scroll, 2);
    }

    #[test]
    fn test_focus_cycles() {
        let mut focus = HomeFocus::ItemInput;
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, HomeFocus::ItemInput);
        assert_eq!(HomeFocus::ItemInput.prev(), HomeFocus::List);
    }
}
