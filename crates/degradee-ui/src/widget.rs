use degradee_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

/// Something [`UiScene`](crate::scene::UiScene) can lay out, paint and feed
/// input to.
pub trait Widget: 'static {
    /// Preferred size within `constraints`. Pure: same inputs, same size.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Records draw commands for the widget occupying `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Handles one input event for the widget occupying `rect`.
    ///
    /// Passive widgets keep the default, which ignores everything.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }
}
