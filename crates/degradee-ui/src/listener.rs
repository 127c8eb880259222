//! Interaction listeners.
//!
//! A listener observes pointer activity on a [`Degradee`] already resolved
//! to a cell: every index-carrying callback receives the cell index and the
//! cell's current color along with the raw event.

use std::cell::RefCell;
use std::rc::Rc;

use degradee_engine::input::{PointerEvent, WheelEvent};
use degradee_engine::paint::Color;

use crate::widgets::degradee::Degradee;

/// Capability implemented by anything that wants pointer callbacks from a
/// [`Degradee`]. Every method defaults to a no-op.
///
/// Callbacks get `&mut Degradee`, so a listener may set marks, resize the
/// strip or (un)register listeners, itself included.
#[allow(unused_variables)]
pub trait DegradeeListener {
    fn clicked(&mut self, degradee: &mut Degradee, index: usize, color: Color, event: &PointerEvent) {}
    fn pressed(&mut self, degradee: &mut Degradee, index: usize, color: Color, event: &PointerEvent) {}
    fn released(&mut self, degradee: &mut Degradee, index: usize, color: Color, event: &PointerEvent) {}
    fn dragged(&mut self, degradee: &mut Degradee, index: usize, color: Color, event: &PointerEvent) {}
    fn moved(&mut self, degradee: &mut Degradee, index: usize, color: Color, event: &PointerEvent) {}
    fn entered(&mut self, degradee: &mut Degradee, event: &PointerEvent) {}
    fn exited(&mut self, degradee: &mut Degradee, event: &PointerEvent) {}
    fn wheel_moved(&mut self, degradee: &mut Degradee, event: &WheelEvent) {}
}

/// Shared, interiorly mutable listener handle as stored by the widget.
pub type SharedListener = Rc<RefCell<dyn DegradeeListener>>;

/// Identity of a registered listener, returned by
/// [`Degradee::add_listener`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ListenerId(pub(crate) u64);
