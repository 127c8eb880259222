use degradee_engine::coords::{Rect, Vec2};
use degradee_engine::paint::Color;
use degradee_engine::scene::{DrawList, TextCmd, ZIndex};
use degradee_engine::text::{FontId, FontSystem};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API. Every call lands on
/// a fresh z-layer, so later calls always paint over earlier ones.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, font_system: &'a FontSystem) -> Self {
        Self { draw_list, font_system, z: 0 }
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Bounding box of `text` on a single line.
    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.font_system.measure_text(text, font, size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_fill_rect(z, rect, color);
    }

    /// Rectangle outline `width` pixels thick.
    pub fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_stroke_rect(z, rect, width, color);
    }

    /// Single-line text whose box's top-left corner is `origin`.
    pub fn text(&mut self, text: impl Into<String>, font: FontId, size: f32, color: Color, origin: Vec2) {
        let z = self.next_z();
        self.draw_list.push_text(z, TextCmd::new(text, font, size).color(color).at(origin));
    }

    /// Text centered in `rect` using the font system's measurement.
    pub fn text_centered(&mut self, text: &str, font: FontId, size: f32, color: Color, rect: Rect) {
        let extent = self.measure_text(text, font, size);
        let center = rect.center();
        let origin = Vec2::new(center.x - extent.x * 0.5, center.y - extent.y * 0.5);
        self.text(text, font, size, color, origin);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
