//! # InputBox Component
//!
//! A single-line text field used for both the "Add item" and "Search" boxes
//! on the Home screen.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Scroll horizontally so the cursor stays visible
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `title`, `placeholder` and
//! `focused` are props set by the parent each frame.

mod text;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub use text::INPUT_HEIGHT;
use text::{
    BORDER_OFFSET, clip_columns, display_width, inner_width, next_char_boundary,
    prev_char_boundary, single_line,
};

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted non-blank text (Enter pressed). The buffer is cleared.
    Submit(String),
    /// Text or cursor changed
    ContentChanged,
}

/// Single-line text input.
///
/// # Props
///
/// - `title`: block title
/// - `placeholder`: dim hint shown while empty and unfocused
/// - `focused`: draws the highlighted border and places the terminal cursor
///
/// # State
///
/// - `buffer`: current text
/// - `cursor`: byte offset into `buffer`
/// - `scroll`: columns hidden off the left edge
pub struct InputBox {
    pub buffer: String,
    pub title: &'static str,
    pub placeholder: &'static str,
    pub focused: bool,
    cursor: usize,
    scroll: usize,
}

impl InputBox {
    pub fn new(title: &'static str, placeholder: &'static str) -> Self {
        Self {
            buffer: String::new(),
            title,
            placeholder,
            focused: false,
            cursor: 0,
            scroll: 0,
        }
    }

    #[cfg(test)]
    fn cursor(&self) -> usize {
        self.cursor
    }

    /// Keep the cursor column inside the visible window of `width` columns.
    fn update_scroll(&mut self, width: usize) {
        let cursor_col = display_width(&self.buffer[..self.cursor]);
        if width == 0 {
            self.scroll = cursor_col;
        } else if cursor_col < self.scroll {
            self.scroll = cursor_col;
        } else if cursor_col >= self.scroll + width {
            self.scroll = cursor_col + 1 - width;
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width) as usize;
        self.update_scroll(width);

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title);

        let paragraph = if self.buffer.is_empty() && !self.focused {
            Paragraph::new(self.placeholder)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            Paragraph::new(clip_columns(&self.buffer, self.scroll, width))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let cursor_col = display_width(&self.buffer[..self.cursor]) - self.scroll;
            let x = area.x + BORDER_OFFSET + cursor_col as u16;
            let y = area.y + BORDER_OFFSET;
            frame.set_cursor_position((x, y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let text = single_line(text);
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if !self.buffer.trim().is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.cursor = 0;
                    self.scroll = 0;
                    Some(InputEvent::Submit(text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
