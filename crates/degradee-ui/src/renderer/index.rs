use degradee_engine::coords::{Rect, Vec2};
use degradee_engine::paint::Color;
use degradee_engine::text::FontId;

use crate::constraints::LayoutCtx;
use crate::geometry::Orientation;
use crate::painter::Painter;
use crate::renderer::CellRenderer;
use crate::widgets::degradee::Degradee;

/// Labels each cell with its one-based position, e.g. `"(1)"`.
///
/// The label is centered in the half of the cell nearest the strip's
/// start: the lower half of horizontal cells, the left half of vertical
/// cells. That keeps it clear of the mark handle in the middle.
///
/// # Example
/// ```rust,ignore
/// degradee.add_renderer(IndexRenderer::new(font, 12.0).color(Color::BLACK));
/// ```
#[derive(Debug, Clone)]
pub struct IndexRenderer {
    font: FontId,
    size: f32,
    color: Color,
}

impl IndexRenderer {
    pub fn new(font: FontId, size: f32) -> Self {
        Self { font, size, color: Color::BLACK }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn label(index: usize) -> String {
        format!("({})", index + 1)
    }

    /// Sub-rectangle of `cell` the label is centered in.
    pub fn label_box(orientation: Orientation, cell: Rect) -> Rect {
        match orientation {
            Orientation::Horizontal => {
                let half = cell.size.y * 0.5;
                Rect::new(cell.origin.x, cell.origin.y + half, cell.size.x, half)
            }
            Orientation::Vertical => {
                Rect::new(cell.origin.x, cell.origin.y, cell.size.x * 0.5, cell.size.y)
            }
        }
    }
}

impl CellRenderer for IndexRenderer {
    fn render(&self, degradee: &Degradee, painter: &mut Painter, cell: Rect, index: usize) {
        let label = Self::label(index);
        let target = Self::label_box(degradee.orientation(), cell);
        painter.text_centered(&label, self.font, self.size, self.color, target);
    }

    /// The last label is the widest; its box fills half the cell.
    fn min_cell_size(&self, degradee: &Degradee, ctx: &LayoutCtx) -> Vec2 {
        let last = degradee.cell_count().saturating_sub(1);
        let text = ctx.fonts.measure_text(&Self::label(last), self.font, self.size);
        match degradee.orientation() {
            Orientation::Horizontal => Vec2::new(text.x, text.y * 2.0),
            Orientation::Vertical => Vec2::new(text.x * 2.0, text.y),
        }
    }
}
