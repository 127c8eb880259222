use degradee_engine::input::{PointerEvent, WheelEvent};

/// Input events routed to widgets.
///
/// One variant per pointer callback of the host toolkit. Positions are in
/// the same logical-pixel space as the `rect` handed to
/// [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Button pressed and released without moving; `click_count` tells
    /// single from double clicks.
    Clicked(PointerEvent),
    Pressed(PointerEvent),
    Released(PointerEvent),
    /// Pointer moved while a button is held.
    Dragged(PointerEvent),
    /// Pointer moved with no button held.
    Moved(PointerEvent),
    /// Pointer entered the widget.
    Entered(PointerEvent),
    /// Pointer left the widget.
    Exited(PointerEvent),
    Wheel(WheelEvent),
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The widget acted on the event.
    Consumed,
    /// Nothing reacted; the host may handle it elsewhere.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
