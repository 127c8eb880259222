//! Per-cell overlay renderers.
//!
//! After a cell is filled (and outlined, with the grid on), every registered
//! renderer draws on top of it in registration order.

mod index;

pub use index::IndexRenderer;

use std::rc::Rc;

use degradee_engine::coords::{Rect, Vec2};

use crate::constraints::LayoutCtx;
use crate::painter::Painter;
use crate::widgets::degradee::Degradee;

/// Capability for drawing extra content over a single cell.
///
/// The widget is borrowed immutably: renderers observe strip state, they
/// never change it.
pub trait CellRenderer {
    fn render(&self, degradee: &Degradee, painter: &mut Painter, cell: Rect, index: usize);

    /// Smallest cell this renderer draws into without clipping.
    fn min_cell_size(&self, _degradee: &Degradee, _ctx: &LayoutCtx) -> Vec2 {
        Vec2::zero()
    }
}

/// Shared renderer handle; the same renderer may serve several widgets.
pub type SharedRenderer = Rc<dyn CellRenderer>;

/// Identity of a registered renderer, returned by
/// [`Degradee::add_renderer`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RendererId(pub(crate) u64);
