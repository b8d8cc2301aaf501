//! # Drawer Component
//!
//! Modal side panel opened from the menu icon. Lists the drawer routes
//! (currently just Settings); Enter or a click picks one, Esc or a click
//! outside the panel dismisses it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DrawerState` lives in `TuiState`
//! - `Drawer` is created each frame with borrowed state
//!
//! Whether the drawer is open is core state (`NavState`); this module only
//! owns the highlighted entry.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::nav::Route;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

const DRAWER_WIDTH: u16 = 28;
/// Rows above the first entry: top border plus the "Menu" heading line.
const ENTRY_TOP: u16 = 2;

/// Persistent state for the drawer overlay.
pub struct DrawerState {
    pub routes: &'static [Route],
    pub selected: usize,
    pub list_state: ListState,
}

impl Default for DrawerState {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawerState {
    pub fn new() -> Self {
        let routes: &'static [Route] = &Route::DRAWER;
        let mut list_state = ListState::default();
        if !routes.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            routes,
            selected: 0,
            list_state,
        }
    }

    fn select(&mut self, index: usize) {
        if self.routes.is_empty() {
            return;
        }
        self.selected = index.min(self.routes.len() - 1);
        self.list_state.select(Some(self.selected));
    }

    /// What a click at `(x, y)` means while the drawer is open.
    pub fn hit_test(&self, frame_area: Rect, x: u16, y: u16) -> DrawerEvent {
        let panel = drawer_area(frame_area);
        let inside = x >= panel.x
            && x < panel.x + panel.width
            && y >= panel.y
            && y < panel.y + panel.height;
        if !inside {
            return DrawerEvent::Dismiss;
        }
        let row = y.saturating_sub(panel.y + ENTRY_TOP) as usize;
        match self.routes.get(row) {
            Some(route) if y >= panel.y + ENTRY_TOP => DrawerEvent::Select(*route),
            _ => DrawerEvent::Ignore,
        }
    }
}

impl EventHandler for DrawerState {
    type Event = DrawerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DrawerEvent> {
        match event {
            TuiEvent::Escape => Some(DrawerEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.select(self.selected + 1);
                None
            }
            TuiEvent::Submit => self.routes.get(self.selected).map(|r| DrawerEvent::Select(*r)),
            _ => None,
        }
    }
}

/// Events emitted by the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    Select(Route),
    Dismiss,
    /// Click landed on the panel but not on an entry
    Ignore,
}

/// The panel's rectangle: left-anchored, full height.
pub fn drawer_area(frame_area: Rect) -> Rect {
    let width = DRAWER_WIDTH.min(frame_area.width);
    Rect::new(frame_area.x, frame_area.y, width, frame_area.height)
}

/// Transient render wrapper for the drawer overlay.
pub struct Drawer<'a> {
    state: &'a mut DrawerState,
}

impl<'a> Drawer<'a> {
    pub fn new(state: &'a mut DrawerState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, frame_area: Rect) {
        let panel = drawer_area(frame_area);
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title_bottom(Line::from(" Enter Open  Esc Close ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        if inner.height == 0 {
            return;
        }
        let heading = Line::styled("Menu", Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(heading, Rect { height: 1, ..inner });

        let items: Vec<ListItem> = self
            .state
            .routes
            .iter()
            .map(|route| ListItem::new(route.label()))
            .collect();
        let list = List::new(items).highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
        let list_area = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        };
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}
