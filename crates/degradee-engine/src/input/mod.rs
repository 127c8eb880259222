//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose toolkit types.
//! The host is responsible for translating its pointer callbacks into
//! [`PointerEvent`]s / [`WheelEvent`]s, including click counting and the
//! platform's context-menu trigger flag.

mod types;

pub use types::{Modifiers, MouseButton, MouseWheelDelta, PointerEvent, WheelEvent};
