use degradee_engine::coords::{Rect, Vec2};
use degradee_engine::scene::DrawList;
use degradee_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the `FontSystem` and the `DrawList` populated by [`frame`](Self::frame).
/// The host keeps the root widget alive between frames and forwards its
/// pointer callbacks through [`route`](Self::route).
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let mut strip = Degradee::new();
///
/// // On every repaint:
/// let draw_list = ui.frame(&strip, viewport);
/// host.submit(draw_list.iter_in_paint_order());
///
/// // On every pointer callback:
/// ui.route(&mut strip, &UiEvent::Clicked(ev), viewport);
/// ```
pub struct UiScene {
    pub font_system: FontSystem,
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new() }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Preferred size of `root` within `viewport`.
    pub fn measure<W: Widget>(&self, root: &W, viewport: Vec2) -> Vec2 {
        let ctx = LayoutCtx { fonts: &self.font_system };
        root.measure(Constraints::loose(viewport), &ctx)
    }

    /// Paints `root` over the full viewport and returns the recorded stream.
    ///
    /// The list is owned by the scene and valid until the next `frame`.
    #[must_use]
    pub fn frame<W: Widget>(&mut self, root: &W, viewport: Vec2) -> &mut DrawList {
        self.draw_list.clear();
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);
        {
            let mut painter = Painter::new(&mut self.draw_list, &self.font_system);
            root.paint(&mut painter, rect);
        }
        &mut self.draw_list
    }

    /// Delivers one input event to `root`, laid out over the full viewport.
    pub fn route<W: Widget>(&mut self, root: &mut W, event: &UiEvent, viewport: Vec2) -> EventResult {
        root.on_event(event, Rect::new(0.0, 0.0, viewport.x, viewport.y))
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
