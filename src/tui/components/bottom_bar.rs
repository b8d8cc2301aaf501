//! # BottomBar Component
//!
//! Tab bar for the bottom-bar routes. Each tab gets an equal share of the
//! width so click hit-testing is a division.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::core::nav::Route;
use crate::tui::component::Component;

pub struct BottomBar {
    pub routes: &'static [Route],
    pub current: Route,
}

impl BottomBar {
    pub fn new(current: Route) -> Self {
        Self {
            routes: &Route::BOTTOM_BAR,
            current,
        }
    }

    fn tab_areas(&self, area: Rect) -> Vec<Rect> {
        let n = self.routes.len().max(1) as u32;
        Layout::horizontal(self.routes.iter().map(|_| Constraint::Ratio(1, n)))
            .split(area)
            .to_vec()
    }

    /// Route under the click at `(x, y)`, if any.
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Route> {
        if y < area.y || y >= area.y + area.height {
            return None;
        }
        self.tab_areas(area)
            .iter()
            .position(|tab| x >= tab.x && x < tab.x + tab.width)
            .map(|i| self.routes[i])
    }
}

impl Component for BottomBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (index, (route, tab)) in self.routes.iter().zip(self.tab_areas(area)).enumerate() {
            let selected = *route == self.current;
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray).bg(Color::Black)
            };
            let label = format!("F{} {}", index + 1, route.label());
            frame.render_widget(
                Paragraph::new(label).alignment(Alignment::Center).style(style),
                tab,
            );
        }
    }
}
