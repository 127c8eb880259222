use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// Single-line label, positioned by the top-left of its measured box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    pub size: f32,
    pub color: Color,
    pub origin: Vec2,
}

impl TextCmd {
    /// Black text at the origin.
    pub fn new(text: impl Into<String>, font: FontId, size: f32) -> Self {
        Self { text: text.into(), font, size, color: Color::BLACK, origin: Vec2::zero() }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn at(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }
}

impl DrawList {
    pub fn push_text(&mut self, z: ZIndex, text: TextCmd) {
        self.push(z, DrawCmd::Text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_defaults() {
        let t = TextCmd::new("(3)", FontId::default(), 12.0);
        assert_eq!(t.color, Color::BLACK);
        assert_eq!(t.origin, Vec2::zero());
        let t = t.color(Color::WHITE).at(Vec2::new(4.0, 5.0));
        assert_eq!((t.color, t.origin), (Color::WHITE, Vec2::new(4.0, 5.0)));
    }
}
