use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Anything the shell can draw into a `Rect`: bars, screens, input boxes.
///
/// Screens are rebuilt every frame from borrowed `App` data, so `render`
/// takes `&mut self` only to let persistent pieces like `InputBox` keep
/// their horizontal scroll in step with the cursor.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that turns raw `TuiEvent`s into its own events.
pub trait EventHandler {
    type Event;

    /// Returns `None` when the event was ignored or produced nothing
    /// the caller needs to act on.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
