use std::fmt;

use crate::coords::Vec2;

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

impl MouseButton {
    /// The button that selects / activates (button 1).
    #[inline]
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }

    /// The button that usually opens context menus (button 3).
    #[inline]
    pub fn is_secondary(self) -> bool {
        self == MouseButton::Right
    }
}

/// Modifier keys state.
///
/// This is stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Mouse wheel delta.
///
/// `Line` corresponds to "scroll lines" style input; `Pixel` is high precision.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

/// Pointer event in logical pixels, relative to the same space as widget rects.
///
/// `button` is `None` for pure motion (move / enter / exit).
/// `click_count` is the host's multi-click counter (`2` for a double click).
/// `context_trigger` is set on whichever event the platform designates as
/// the popup-menu trigger (press on some platforms, release on others).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub pos: Vec2,
    pub button: Option<MouseButton>,
    pub click_count: u32,
    pub context_trigger: bool,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Motion-only event at `(x, y)`.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            button: None,
            click_count: 0,
            context_trigger: false,
            modifiers: Modifiers::default(),
        }
    }

    pub fn button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        self
    }

    pub fn clicks(mut self, count: u32) -> Self {
        self.click_count = count;
        self
    }

    pub fn context_trigger(mut self, flag: bool) -> Self {
        self.context_trigger = flag;
        self
    }

    #[inline]
    pub fn is_button(&self, button: MouseButton) -> bool {
        self.button == Some(button)
    }
}

/// Wheel / trackpad scroll event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WheelEvent {
    pub pos: Vec2,
    pub delta: MouseWheelDelta,
    pub modifiers: Modifiers,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Other(code) => write!(f, "Button{code}"),
            named => write!(f, "{named:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let ev = PointerEvent::at(3.0, 4.0)
            .button(MouseButton::Right)
            .clicks(1)
            .context_trigger(true);
        assert_eq!(ev.pos, Vec2::new(3.0, 4.0));
        assert!(ev.is_button(MouseButton::Right));
        assert_eq!(ev.click_count, 1);
        assert!(ev.context_trigger);
        assert_eq!(ev.modifiers, Modifiers::default());
    }

    #[test]
    fn motion_event_has_no_button() {
        let ev = PointerEvent::at(0.0, 0.0);
        assert_eq!(ev.button, None);
        assert!(!ev.is_button(MouseButton::Left));
    }

    #[test]
    fn button_roles_and_display() {
        assert!(MouseButton::Left.is_primary());
        assert!(MouseButton::Right.is_secondary());
        assert!(!MouseButton::Middle.is_primary());
        assert_eq!(MouseButton::Other(7).to_string(), "Button7");
        assert_eq!(MouseButton::Left.to_string(), "Left");
    }
}
