use degradee_engine::paint::Color;

use crate::geometry::{GeometryMapper, Orientation};
use crate::strip::GradientStrip;

/// A mark placed at construction time, positioned by ratio along the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialMark {
    pub ratio: f64,
    pub color: Color,
}

/// Everything needed to build a [`Degradee`](crate::widgets::degradee::Degradee).
///
/// Fields are public; the builder methods are shorthand for chained setup.
/// Validation happens in [`Degradee::from_config`](crate::widgets::degradee::Degradee::from_config).
///
/// # Example
/// ```rust,ignore
/// let strip = Degradee::from_config(
///     DegradeeConfig::default()
///         .cell_count(32)
///         .orientation(Orientation::Vertical)
///         .grid(true),
/// )?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DegradeeConfig {
    pub cell_count: usize,
    pub orientation: Orientation,
    pub grid_visible: bool,
    pub grid_line_color: Color,
    pub primary_color: Color,
    pub secondary_color: Color,
    /// Side of the square mark handle in logical pixels.
    pub mark_size: f32,
    pub initial_marks: Vec<InitialMark>,
}

impl DegradeeConfig {
    pub fn cell_count(mut self, n: usize) -> Self { self.cell_count = n; self }
    pub fn orientation(mut self, o: Orientation) -> Self { self.orientation = o; self }
    pub fn grid(mut self, visible: bool) -> Self { self.grid_visible = visible; self }
    pub fn grid_line_color(mut self, c: Color) -> Self { self.grid_line_color = c; self }
    pub fn primary_color(mut self, c: Color) -> Self { self.primary_color = c; self }
    pub fn secondary_color(mut self, c: Color) -> Self { self.secondary_color = c; self }
    pub fn mark_size(mut self, v: f32) -> Self { self.mark_size = v; self }

    /// Appends a mark at `ratio` of the strip.
    pub fn mark(mut self, ratio: f64, color: Color) -> Self {
        self.initial_marks.push(InitialMark { ratio, color });
        self
    }

    /// Drops every initial mark, including the default one.
    pub fn no_marks(mut self) -> Self {
        self.initial_marks.clear();
        self
    }
}

impl Default for DegradeeConfig {
    /// Eleven horizontal cells from red to blue, grid hidden, with a yellow
    /// mark in the middle.
    fn default() -> Self {
        Self {
            cell_count: GradientStrip::DEFAULT_CELLS,
            orientation: Orientation::Horizontal,
            grid_visible: false,
            grid_line_color: Color::BLACK,
            primary_color: Color::RED,
            secondary_color: Color::BLUE,
            mark_size: GeometryMapper::MARK_SIZE,
            initial_marks: vec![InitialMark { ratio: 0.5, color: Color::YELLOW }],
        }
    }
}
