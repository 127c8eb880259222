//! Degradee UI: a discretized color gradient strip widget on top of
//! `degradee-engine`.
//!
//! The strip is split into equal cells. Each cell shows the primary→secondary
//! gradient, or a user-chosen *mark* color; unmarked cells between marks
//! interpolate between the nearest anchors.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use degradee_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let font = scene.load_font(include_bytes!("my_font.ttf")).unwrap();
//!
//! let mut strip = Degradee::new();
//! strip.add_renderer(IndexRenderer::new(font, 12.0));
//! strip.add_listener(StandardAdapter::new("Edit", "Delete", host_chooser, host_menu));
//!
//! // On every pointer callback of the host:
//! scene.route(&mut strip, &UiEvent::Clicked(ev), viewport);
//!
//! // When `strip.take_redraw_request()` says so:
//! let draw_list = scene.frame(&strip, viewport);
//! // Hand draw_list.iter_in_paint_order() to your rasterizer.
//! ```
//!
//! # Extending
//!
//! Implement [`CellRenderer`](renderer::CellRenderer) to draw over cells,
//! or [`DegradeeListener`](listener::DegradeeListener) to react to pointer
//! activity resolved to cells.

pub mod adapters;
pub mod config;
pub mod constraints;
pub mod error;
pub mod event;
pub mod geometry;
pub mod listener;
pub mod painter;
mod registry;
pub mod renderer;
pub mod scene;
pub mod strip;
pub mod widget;
pub mod widgets;

pub use error::DegradeeError;
pub use strip::GradientStrip;
pub use widgets::Degradee;

/// Everything needed to embed and extend the widget.
pub mod prelude {
    pub use crate::adapters::{ColorChooser, MarkAction, MarkMenu, MenuEntry, StandardAdapter};
    pub use crate::config::{DegradeeConfig, InitialMark};
    pub use crate::constraints::{Constraints, LayoutCtx};
    pub use crate::error::DegradeeError;
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::geometry::{GeometryMapper, Orientation};
    pub use crate::listener::{DegradeeListener, ListenerId, SharedListener};
    pub use crate::painter::Painter;
    pub use crate::renderer::{CellRenderer, IndexRenderer, RendererId, SharedRenderer};
    pub use crate::scene::UiScene;
    pub use crate::strip::GradientStrip;
    pub use crate::widget::Widget;
    pub use crate::widgets::Degradee;

    // Engine primitives.
    pub use degradee_engine::coords::{Rect, Vec2};
    pub use degradee_engine::input::{Modifiers, MouseButton, MouseWheelDelta, PointerEvent, WheelEvent};
    pub use degradee_engine::paint::Color;
    pub use degradee_engine::scene::{DrawCmd, DrawList};
    pub use degradee_engine::text::FontId;
}
