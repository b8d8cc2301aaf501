//! # Home Screen
//!
//! Header, the "Add item" box, the search box, and the filtered list.
//!
//! Transient wrapper: built each frame from borrowed `App` data and the two
//! `InputBox`es that live in `TuiState`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Wrap};

use crate::core::items::ShoppingItem;
use crate::tui::component::Component;
use crate::tui::components::input_box::{INPUT_HEIGHT, InputBox};

pub struct HomeScreen<'a> {
    pub items: Vec<&'a ShoppingItem>,
    pub total: usize,
    pub query: &'a str,
    pub item_input: &'a mut InputBox,
    pub search_input: &'a mut InputBox,
    pub list_focused: bool,
    pub scroll: usize,
    pub style: Style,
}

impl HomeScreen<'_> {
    /// Rows available to list entries inside `area` (the whole screen area).
    pub fn list_rows(area: Rect) -> usize {
        let [_, _, _, list_area] = Self::areas(area);
        list_area.height.saturating_sub(2) as usize
    }

    /// Header, item box, search box and list, top to bottom.
    pub fn areas(area: Rect) -> [Rect; 4] {
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area)
    }

    fn empty_message(&self) -> String {
        if self.total == 0 {
            "No items yet. Type one above and press Enter.".to_string()
        } else {
            format!("No items match \"{}\".", self.query)
        }
    }
}

impl Component for HomeScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, item_area, search_area, list_area] = Self::areas(area);

        let header = Line::styled(
            "Shopping List",
            self.style.add_modifier(Modifier::BOLD),
        );
        frame.render_widget(header, header_area);

        self.item_input.render(frame, item_area);
        self.search_input.render(frame, search_area);

        let border_style = if self.list_focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!("Items ({}/{})", self.items.len(), self.total));

        if self.items.is_empty() {
            let empty = Paragraph::new(self.empty_message())
                .style(self.style.fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(empty, list_area);
            return;
        }

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(format!("• {}", item.text())))
            .collect();
        let max_offset = self.items.len().saturating_sub(Self::list_rows(area));
        let mut state = ListState::default().with_offset(self.scroll.min(max_offset));
        let list = List::new(rows).style(self.style).block(block);
        frame.render_stateful_widget(list, list_area, &mut state);
    }
}
