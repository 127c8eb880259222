//! Gradient strip state and color resolution.
//!
//! A strip is `cell_count` discrete cells between two boundary colors.
//! Any cell may carry a *mark*: a fixed color that overrides interpolation
//! at that cell and becomes an anchor for its unmarked neighbours.

use degradee_engine::paint::Color;

use crate::error::DegradeeError;

/// Discretized color gradient with optional per-cell anchors.
///
/// Invariant: `MIN_CELLS <= marks.len() <= MAX_CELLS`, and `marks.len()` is
/// the cell count. [`color_at`](Self::color_at) is a pure function of the
/// boundary colors and the mark array.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStrip {
    primary: Color,
    secondary: Color,
    marks: Vec<Option<Color>>,
}

impl GradientStrip {
    pub const MIN_CELLS: usize = 2;
    pub const MAX_CELLS: usize = 512;
    pub const DEFAULT_CELLS: usize = 11;

    /// Creates an unmarked strip.
    pub fn new(cell_count: usize, primary: Color, secondary: Color) -> Result<Self, DegradeeError> {
        check_cell_count(cell_count)?;
        Ok(Self { primary, secondary, marks: vec![None; cell_count] })
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    pub fn primary_color(&self) -> Color {
        self.primary
    }

    #[inline]
    pub fn secondary_color(&self) -> Color {
        self.secondary
    }

    pub fn set_primary_color(&mut self, color: Color) {
        self.primary = color;
    }

    pub fn set_secondary_color(&mut self, color: Color) {
        self.secondary = color;
    }

    /// Resizes the strip, carrying every mark to the proportional position.
    ///
    /// A mark at old index `i` lands on `round(i * new / old)`, clamped to
    /// the last cell. When two marks collide the one with the higher old
    /// index wins. Out-of-range counts are rejected and leave the strip
    /// untouched.
    pub fn set_cell_count(&mut self, cell_count: usize) -> Result<(), DegradeeError> {
        check_cell_count(cell_count)?;

        let old_len = self.marks.len();
        let mut remapped = vec![None; cell_count];
        for (i, color) in self.marks() {
            let j = round_half_up(i as f64 * cell_count as f64 / old_len as f64) as usize;
            remapped[j.min(cell_count - 1)] = Some(color);
        }
        self.marks = remapped;

        log::debug!("strip resized {} -> {} cells, {} mark(s) kept", old_len, cell_count, self.mark_count());
        Ok(())
    }

    // ── marks ─────────────────────────────────────────────────────────────

    /// Sets (`Some`) or clears (`None`) the mark at `index`.
    ///
    /// Returns the mark previously stored there.
    pub fn set_mark(&mut self, index: usize, color: Option<Color>) -> Result<Option<Color>, DegradeeError> {
        let len = self.marks.len();
        let slot = self
            .marks
            .get_mut(index)
            .ok_or(DegradeeError::IndexOutOfBounds { index, len })?;
        let previous = std::mem::replace(slot, color);
        match color {
            Some(c) => log::debug!("mark {} set to {}", index, c),
            None if previous.is_some() => log::debug!("mark {} cleared", index),
            None => {}
        }
        Ok(previous)
    }

    /// Shorthand for `set_mark(index, None)`.
    pub fn clear_mark(&mut self, index: usize) -> Result<Option<Color>, DegradeeError> {
        self.set_mark(index, None)
    }

    /// Sets the mark at `round((cell_count - 1) * ratio)` and returns that index.
    pub fn set_mark_by_ratio(&mut self, ratio: f64, color: Option<Color>) -> Result<usize, DegradeeError> {
        let index = self.ratio_index(ratio, self.cell_count() - 1)?;
        self.set_mark(index, color)?;
        Ok(index)
    }

    pub fn clear_marks(&mut self) {
        self.marks.fill(None);
    }

    /// `true` when `index` holds a mark. Out-of-range indices hold none.
    #[inline]
    pub fn has_mark(&self, index: usize) -> bool {
        matches!(self.marks.get(index), Some(Some(_)))
    }

    pub fn mark_at(&self, index: usize) -> Result<Option<Color>, DegradeeError> {
        self.marks
            .get(index)
            .copied()
            .ok_or(DegradeeError::IndexOutOfBounds { index, len: self.marks.len() })
    }

    /// Set marks as `(index, color)`, ascending by index.
    pub fn marks(&self) -> impl Iterator<Item = (usize, Color)> + '_ {
        self.marks.iter().enumerate().filter_map(|(i, m)| m.map(|c| (i, c)))
    }

    pub fn mark_count(&self) -> usize {
        self.marks.iter().filter(|m| m.is_some()).count()
    }

    // ── color resolution ──────────────────────────────────────────────────

    /// Resolved color of cell `index`.
    pub fn color_at(&self, index: usize) -> Result<Color, DegradeeError> {
        if index >= self.marks.len() {
            return Err(DegradeeError::IndexOutOfBounds { index, len: self.marks.len() });
        }
        Ok(self.resolve(index))
    }

    /// Color of the cell at `round(cell_count * ratio)`.
    ///
    /// Scales by `cell_count`, not `cell_count - 1` like
    /// [`set_mark_by_ratio`](Self::set_mark_by_ratio), so `ratio = 1.0`
    /// resolves one past the last cell and is rejected.
    pub fn color_at_ratio(&self, ratio: f64) -> Result<Color, DegradeeError> {
        let index = self.ratio_index(ratio, self.cell_count())?;
        Ok(self.resolve(index))
    }

    /// Resolved colors of every cell, in index order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        (0..self.marks.len()).map(|i| self.resolve(i))
    }

    /// Caller guarantees `index < cell_count`.
    fn resolve(&self, index: usize) -> Color {
        if let Some(color) = self.marks[index] {
            return color;
        }

        let last = (self.marks.len() - 1) as f64;
        let at = index as f64;
        let (from, to, t) = match (self.prev_mark(index), self.next_mark(index)) {
            (None, None) => (self.primary, self.secondary, at / last),
            (Some((p, pc)), Some((n, nc))) => (pc, nc, (at - p as f64) / (n - p) as f64),
            (Some((p, pc)), None) => (pc, self.secondary, (at - p as f64) / (last - p as f64)),
            (None, Some((n, nc))) => (self.primary, nc, at / n as f64),
        };
        from.lerp(to, t)
    }

    /// Nearest mark strictly before `index`.
    fn prev_mark(&self, index: usize) -> Option<(usize, Color)> {
        self.marks[..index]
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, m)| m.map(|c| (i, c)))
    }

    /// Nearest mark strictly after `index`.
    fn next_mark(&self, index: usize) -> Option<(usize, Color)> {
        self.marks[index + 1..]
            .iter()
            .enumerate()
            .find_map(|(i, m)| m.map(|c| (index + 1 + i, c)))
    }

    fn ratio_index(&self, ratio: f64, scale: usize) -> Result<usize, DegradeeError> {
        let len = self.marks.len();
        let v = round_half_up(scale as f64 * ratio);
        if !v.is_finite() || v < 0.0 || v >= len as f64 {
            return Err(DegradeeError::RatioOutOfRange { ratio, len });
        }
        Ok(v as usize)
    }
}

impl Default for GradientStrip {
    /// Eleven unmarked cells from red to blue.
    fn default() -> Self {
        Self {
            primary: Color::RED,
            secondary: Color::BLUE,
            marks: vec![None; Self::DEFAULT_CELLS],
        }
    }
}

fn check_cell_count(n: usize) -> Result<(), DegradeeError> {
    if (GradientStrip::MIN_CELLS..=GradientStrip::MAX_CELLS).contains(&n) {
        Ok(())
    } else {
        Err(DegradeeError::CellCountOutOfRange {
            requested: n,
            min: GradientStrip::MIN_CELLS,
            max: GradientStrip::MAX_CELLS,
        })
    }
}

/// Rounds halves towards positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}
