//! Mapping between cell indices and screen rectangles.

use degradee_engine::coords::{Rect, Vec2};

use crate::strip::GradientStrip;

/// Axis along which cells are laid out.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Cells run left to right; each spans the full height.
    #[default]
    Horizontal,
    /// Cells run top to bottom; each spans the full width.
    Vertical,
}

/// Stateless layout of a strip inside `bounds`.
///
/// Built fresh for every layout or hit-test query. Along the orientation
/// axis cell `i` spans `[edge(i), edge(i + 1))` with
/// `edge(k) = start + extent * k / cell_count`, so neighbours share one
/// boundary value and every point of `bounds` belongs to exactly one cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeometryMapper {
    orientation: Orientation,
    bounds: Rect,
    cell_count: usize,
}

impl GeometryMapper {
    /// Default side of the square mark handle, in logical pixels.
    pub const MARK_SIZE: f32 = 10.0;

    /// `cell_count` must be non-zero; strips guarantee at least two cells.
    pub fn new(orientation: Orientation, bounds: Rect, cell_count: usize) -> Self {
        debug_assert!(cell_count > 0, "GeometryMapper needs at least one cell");
        Self { orientation, bounds, cell_count }
    }

    pub fn for_strip(strip: &GradientStrip, orientation: Orientation, bounds: Rect) -> Self {
        Self::new(orientation, bounds, strip.cell_count())
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// `(start, extent)` of `bounds` along the orientation axis.
    #[inline]
    fn axis(&self) -> (f32, f32) {
        let Rect { origin, size } = self.bounds;
        match self.orientation {
            Orientation::Horizontal => (origin.x, size.x),
            Orientation::Vertical => (origin.y, size.y),
        }
    }

    /// Nominal size of one cell along the orientation axis.
    #[inline]
    pub fn cell_extent(&self) -> f32 {
        self.axis().1 / self.cell_count as f32
    }

    /// Boundary between cells `k - 1` and `k` along the orientation axis.
    #[inline]
    pub fn edge(&self, k: usize) -> f32 {
        let (start, extent) = self.axis();
        start + extent * k as f32 / self.cell_count as f32
    }

    /// Rectangle of cell `index`.
    ///
    /// Not bounds-checked: indices past the end yield rectangles outside
    /// `bounds`.
    pub fn cell_bounds(&self, index: usize) -> Rect {
        let lo = self.edge(index);
        let step = self.edge(index + 1) - lo;
        let Rect { origin, size } = self.bounds;
        match self.orientation {
            Orientation::Horizontal => Rect::new(lo, origin.y, step, size.y),
            Orientation::Vertical => Rect::new(origin.x, lo, size.x, step),
        }
    }

    /// Square of side `mark_size` centered on cell `index`.
    pub fn handle_bounds(&self, index: usize, mark_size: f32) -> Rect {
        Rect::square_around(self.cell_bounds(index).center(), mark_size)
    }

    /// Handle rectangle of the mark at `index`, or `None` when the cell is unmarked.
    pub fn mark_handle_bounds(&self, strip: &GradientStrip, index: usize, mark_size: f32) -> Option<Rect> {
        strip.has_mark(index).then(|| self.handle_bounds(index, mark_size))
    }

    /// Cell under `pos`, or `None` outside `bounds`.
    ///
    /// Computed from the position rather than by testing each cell rect, so
    /// no point inside `bounds` falls between two cells.
    pub fn index_at(&self, pos: Vec2) -> Option<usize> {
        if !self.bounds.contains(pos) {
            return None;
        }
        let (start, extent) = self.axis();
        let along = match self.orientation {
            Orientation::Horizontal => pos.x,
            Orientation::Vertical => pos.y,
        };
        let raw = ((along - start) / extent * self.cell_count as f32).floor();
        // `raw` can round up to `cell_count` right at the far edge.
        Some((raw.max(0.0) as usize).min(self.cell_count - 1))
    }

    /// First marked cell whose handle contains `pos`.
    ///
    /// Handles wider than their cell overlap neighbours, so every mark is
    /// tested rather than only the cell under the pointer.
    pub fn mark_index_at(&self, strip: &GradientStrip, pos: Vec2, mark_size: f32) -> Option<usize> {
        strip
            .marks()
            .map(|(i, _)| i)
            .find(|&i| self.handle_bounds(i, mark_size).contains(pos))
    }

    /// `(index, rect)` for every cell, in index order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        (0..self.cell_count).map(|i| (i, self.cell_bounds(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use degradee_engine::paint::Color;

    fn horizontal(n: usize) -> GeometryMapper {
        GeometryMapper::new(Orientation::Horizontal, Rect::new(0.0, 0.0, 500.0, 100.0), n)
    }

    // ── cell_bounds ───────────────────────────────────────────────────────

    #[test]
    fn horizontal_cells_split_width() {
        let m = horizontal(10);
        assert_eq!(m.cell_bounds(0), Rect::new(0.0, 0.0, 50.0, 100.0));
        assert_eq!(m.cell_bounds(3), Rect::new(150.0, 0.0, 50.0, 100.0));
    }

    #[test]
    fn vertical_cells_split_height() {
        let m = GeometryMapper::new(Orientation::Vertical, Rect::new(0.0, 0.0, 40.0, 200.0), 4);
        assert_eq!(m.cell_bounds(1), Rect::new(0.0, 50.0, 40.0, 50.0));
    }

    #[test]
    fn cells_follow_bounds_origin() {
        let m = GeometryMapper::new(Orientation::Horizontal, Rect::new(20.0, 30.0, 100.0, 10.0), 4);
        assert_eq!(m.cell_bounds(2), Rect::new(70.0, 30.0, 25.0, 10.0));
    }

    #[test]
    fn out_of_range_cell_lies_outside_bounds() {
        let m = horizontal(10);
        assert_eq!(m.cell_bounds(10).origin.x, 500.0);
    }

    // ── index_at ──────────────────────────────────────────────────────────

    #[test]
    fn index_at_finds_containing_cell() {
        let m = horizontal(10);
        assert_eq!(m.index_at(Vec2::new(0.0, 0.0)), Some(0));
        assert_eq!(m.index_at(Vec2::new(49.9, 50.0)), Some(0));
        assert_eq!(m.index_at(Vec2::new(50.0, 50.0)), Some(1));
        assert_eq!(m.index_at(Vec2::new(499.0, 99.0)), Some(9));
    }

    #[test]
    fn every_pixel_inside_hits_a_cell() {
        let counts = [2, 3, 7, 11, 24, 30, 33, 48, 64, 100, 128, 255, 300, 333, 400, 500, 512];
        for origin in [0.0f32, 13.0, -7.5] {
            for width in 50..=1200u32 {
                let bounds = Rect::new(origin, 0.0, width as f32, 40.0);
                for n in counts {
                    let m = GeometryMapper::new(Orientation::Horizontal, bounds, n);
                    let mut last = 0;
                    for x in 0..width {
                        let hit = m.index_at(Vec2::new(origin + x as f32, 20.0));
                        let Some(i) = hit else {
                            panic!("x={x} missed: width {width}, {n} cells, origin {origin}");
                        };
                        assert!(i >= last, "index went backwards at x={x}");
                        last = i;
                    }
                }
            }
        }
    }

    #[test]
    fn vertical_pixels_hit_cells() {
        let m = GeometryMapper::new(Orientation::Vertical, Rect::new(0.0, 0.0, 10.0, 132.0), 100);
        for y in 0..132 {
            assert!(m.index_at(Vec2::new(5.0, y as f32)).is_some(), "y={y}");
        }
        assert_eq!(m.index_at(Vec2::new(5.0, 131.9)), Some(99));
    }

    #[test]
    fn neighbours_share_an_edge() {
        let m = GeometryMapper::new(Orientation::Horizontal, Rect::new(13.0, 0.0, 132.0, 10.0), 100);
        for i in 0..99 {
            assert_eq!(m.cell_bounds(i + 1).origin.x, m.edge(i + 1));
        }
        assert_eq!(m.edge(0), 13.0);
        assert_eq!(m.edge(100), 145.0);
    }

    #[test]
    fn index_at_outside_is_none() {
        let m = horizontal(10);
        assert_eq!(m.index_at(Vec2::new(500.0, 50.0)), None);
        assert_eq!(m.index_at(Vec2::new(-1.0, 50.0)), None);
        assert_eq!(m.index_at(Vec2::new(10.0, 100.0)), None);
    }

    // ── handles ───────────────────────────────────────────────────────────

    #[test]
    fn handle_is_centered_square() {
        let m = horizontal(10);
        let h = m.handle_bounds(2, GeometryMapper::MARK_SIZE);
        assert_eq!(h, Rect::new(120.0, 45.0, 10.0, 10.0));
    }

    #[test]
    fn mark_handle_requires_mark() {
        let m = horizontal(11);
        let mut strip = GradientStrip::default();
        assert_eq!(m.mark_handle_bounds(&strip, 5, 10.0), None);
        strip.set_mark(5, Some(Color::YELLOW)).unwrap();
        assert!(m.mark_handle_bounds(&strip, 5, 10.0).is_some());
    }

    #[test]
    fn mark_index_at_hits_only_the_handle() {
        let m = horizontal(10);
        let mut strip = GradientStrip::new(10, Color::RED, Color::BLUE).unwrap();
        strip.set_mark(2, Some(Color::GREEN)).unwrap();
        assert_eq!(m.mark_index_at(&strip, Vec2::new(125.0, 50.0), 10.0), Some(2));
        // Same cell, outside the handle.
        assert_eq!(m.mark_index_at(&strip, Vec2::new(105.0, 10.0), 10.0), None);
    }

    #[test]
    fn cells_iterates_every_index() {
        let m = horizontal(7);
        let idx: Vec<usize> = m.cells().map(|(i, _)| i).collect();
        assert_eq!(idx, (0..7).collect::<Vec<_>>());
    }
}
