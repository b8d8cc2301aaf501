//! Pure text helpers and dimensional constants for the InputBox.
//!
//! These are stateless helpers with no dependency on InputBox or CursorState.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Left + right borders consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;
/// Total height of the box: one content line plus top and bottom borders
pub const INPUT_HEIGHT: u16 = 3;

/// Calculate the inner content width after subtracting border overhead.
/// Returns 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Terminal columns occupied by `text`.
pub(super) fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// The part of `text` visible after skipping `skip` columns and keeping at
/// most `max` columns. Wide characters that straddle either edge are dropped.
pub(super) fn clip_columns(text: &str, skip: usize, max: usize) -> &str {
    let mut col = 0;
    let mut start = text.len();
    let mut end = text.len();
    for (i, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if start == text.len() && col >= skip {
            start = i;
        }
        if start != text.len() && col + w > skip + max {
            end = i;
            break;
        }
        col += w;
    }
    if start > end {
        return "";
    }
    &text[start..end]
}

/// Replace line breaks with spaces; the box holds a single line.
pub(super) fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
