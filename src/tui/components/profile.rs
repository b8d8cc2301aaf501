//! # Profile Screen
//!
//! A heading and a card with the configured student profile. Unset fields
//! render as "-".

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::config::ProfileConfig;
use crate::tui::component::Component;

const LABEL_WIDTH: usize = 15;

pub struct ProfileScreen<'a> {
    pub profile: &'a ProfileConfig,
    pub scroll: usize,
    pub style: Style,
}

impl<'a> ProfileScreen<'a> {
    pub fn new(profile: &'a ProfileConfig, scroll: usize, style: Style) -> Self {
        Self {
            profile,
            scroll,
            style,
        }
    }

    fn field(label: &str, value: Option<&str>) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{label:<LABEL_WIDTH$}: "),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(value.unwrap_or("-").to_string()),
        ])
    }

    fn card(&self, width: u16) -> Paragraph<'static> {
        let p = self.profile;
        let divider = "─".repeat(width.saturating_sub(4) as usize);
        let lines = vec![
            Self::field("Name", p.name.as_deref()),
            Self::field("Student ID", p.student_id.as_deref()),
            Self::field("Hobbies", p.hobbies.as_deref()),
            Line::styled(divider, Style::default().fg(Color::DarkGray)),
            Self::field("Born", p.birth_line().as_deref()),
            Self::field("Specialization", p.specialization.as_deref()),
        ];
        Paragraph::new(lines)
            .style(self.style)
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .padding(Padding::horizontal(1)),
            )
    }

    /// Rows the card scrolls past before its last line reaches the top.
    pub fn scroll_limit(profile: &ProfileConfig, area: Rect) -> usize {
        let screen = ProfileScreen::new(profile, 0, Style::default());
        let card = screen.card(area.width);
        card.line_count(area.width).saturating_sub(3)
    }
}

impl Component for ProfileScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [heading_area, _, card_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let heading = Line::styled(
            "Student Profile",
            self.style.add_modifier(Modifier::BOLD),
        );
        frame.render_widget(heading, heading_area);

        let scroll = u16::try_from(self.scroll).unwrap_or(u16::MAX);
        let card = self.card(card_area.width).scroll((scroll, 0));
        frame.render_widget(card, card_area);
    }
}
