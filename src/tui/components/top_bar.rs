//! # TopBar Component
//!
//! Single-line app bar: the menu icon that opens the drawer, then the title
//! of the current screen.
//!
//! Stateless: it receives everything as props and renders what it's given.
//! The icon occupies the first [`MENU_ICON_WIDTH`] columns so the event loop
//! can hit-test clicks on it without asking the component.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub const MENU_ICON: &str = " ≡ ";
pub const MENU_ICON_WIDTH: u16 = 3;

pub struct TopBar {
    pub title: String,
    /// Drawn highlighted while the drawer is open
    pub drawer_open: bool,
}

impl TopBar {
    pub fn new(title: impl Into<String>, drawer_open: bool) -> Self {
        Self {
            title: title.into(),
            drawer_open,
        }
    }

    /// Whether column `x` of a top bar starting at `area.x` hits the menu icon.
    pub fn hits_menu_icon(area: Rect, x: u16, y: u16) -> bool {
        y == area.y && x >= area.x && x < area.x + MENU_ICON_WIDTH
    }
}

impl Component for TopBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let icon_style = if self.drawer_open {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let line = Line::from(vec![
            Span::styled(MENU_ICON, icon_style),
            Span::raw(" "),
            Span::styled(
                self.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(line, area);
    }
}
