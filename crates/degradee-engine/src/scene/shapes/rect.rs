use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Solid rectangle fill.
#[derive(Debug, Clone, PartialEq)]
pub struct FillRectCmd {
    pub rect: Rect,
    pub color: Color,
}

/// Rectangle outline drawn along the inside of `rect`.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRectCmd {
    pub rect: Rect,
    pub width: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a solid rectangle fill.
    #[inline]
    pub fn push_fill_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::FillRect(FillRectCmd { rect, color }));
    }

    /// Records a rectangle outline of `width` logical pixels.
    #[inline]
    pub fn push_stroke_rect(&mut self, z: ZIndex, rect: Rect, width: f32, color: Color) {
        self.push(z, DrawCmd::StrokeRect(StrokeRectCmd { rect, width, color }));
    }
}
