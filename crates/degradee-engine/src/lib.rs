//! Degradee engine crate.
//!
//! Renderer-agnostic building blocks shared by the widget layer: geometry,
//! 8-bit colors, the recorded draw stream, pointer input types, text
//! measurement and logger setup. Nothing here knows about windows or GPUs;
//! a host toolkit consumes the [`scene::DrawList`] and feeds
//! [`input::PointerEvent`]s back in.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
