use degradee_engine::coords::Vec2;
use degradee_engine::text::FontSystem;

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. Parents enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child may be anything from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No upper bound on either axis.
    #[inline]
    pub fn unbounded() -> Self {
        Self::loose(Vec2::splat(f32::INFINITY))
    }

    /// Clamps `size` into `[min, max]` on each axis.
    #[inline]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.clamp(self.min.x, self.max.x),
            size.y.clamp(self.min.y, self.max.y),
        )
    }
}

// ── LayoutCtx ─────────────────────────────────────────────────────────────

/// Shared read-only resources available during measure.
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
}
