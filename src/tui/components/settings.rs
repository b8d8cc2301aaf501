//! # Settings Screen
//!
//! A greeting line and a read-only summary of the resolved configuration.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::config::{ResolvedConfig, default_config_path};
use crate::tui::component::Component;

pub struct SettingsScreen<'a> {
    pub config: &'a ResolvedConfig,
    pub scroll: usize,
    pub style: Style,
}

impl<'a> SettingsScreen<'a> {
    pub fn new(config: &'a ResolvedConfig, scroll: usize, style: Style) -> Self {
        Self {
            config,
            scroll,
            style,
        }
    }

    fn config_location(&self) -> String {
        match (&self.config.source, default_config_path()) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(path)) => format!("{} (not found, using defaults)", path.display()),
            (None, None) => "defaults only".to_string(),
        }
    }

    fn paragraph(&self) -> Paragraph<'static> {
        let row = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::Cyan)),
                Span::raw(value),
            ])
        };
        let fade = if self.config.fade_ms == 0 {
            "off".to_string()
        } else {
            format!("{} ms", self.config.fade_ms)
        };
        let mut lines = vec![
            Line::styled(
                "This is the Settings page",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            row("Config", self.config_location()),
            row("Title", self.config.title.clone()),
            row("Screen fade", fade),
            row("Log level", self.config.log_level.to_string()),
        ];
        if !self.config.ignored.is_empty() {
            lines.push(row("Ignored", self.config.ignored.join(", ")));
        }
        Paragraph::new(lines)
            .style(self.style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }

    /// Rows the summary scrolls past before its last line reaches the top.
    pub fn scroll_limit(config: &ResolvedConfig, area: Rect) -> usize {
        SettingsScreen::new(config, 0, Style::default())
            .paragraph()
            .line_count(area.width)
            .saturating_sub(1)
    }
}

impl Component for SettingsScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Vertically centre the summary when it fits.
        let height = self.paragraph().line_count(area.width) as u16;
        let top = area.height.saturating_sub(height) / 2;
        let body = Rect {
            y: area.y + top,
            height: area.height - top,
            ..area
        };
        let scroll = u16::try_from(self.scroll).unwrap_or(u16::MAX);
        frame.render_widget(self.paragraph().scroll((scroll, 0)), body);
    }
}
