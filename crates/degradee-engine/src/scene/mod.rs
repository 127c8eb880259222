//! Recorded draw stream.
//!
//! Widgets push commands tagged with a [`ZIndex`]; hosts read them back with
//! [`DrawList::iter_in_paint_order`] and rasterize them however they like.
//! Each shape lives in its own file under `shapes` together with its
//! `DrawList::push_*` helper.

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
pub use shapes::rect::{FillRectCmd, StrokeRectCmd};
pub use shapes::text::TextCmd;
