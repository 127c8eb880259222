use std::cell::{Cell, RefCell};
use std::rc::Rc;

use degradee_engine::coords::{Rect, Vec2};
use degradee_engine::paint::Color;

use crate::config::{DegradeeConfig, InitialMark};
use crate::constraints::{Constraints, LayoutCtx};
use crate::error::DegradeeError;
use crate::event::{EventResult, UiEvent};
use crate::geometry::{GeometryMapper, Orientation};
use crate::listener::{DegradeeListener, ListenerId, SharedListener};
use crate::painter::Painter;
use crate::registry::Registry;
use crate::renderer::{CellRenderer, RendererId, SharedRenderer};
use crate::strip::GradientStrip;
use crate::widget::Widget;

const GRID_LINE_WIDTH: f32 = 1.0;
const PREFERRED_LENGTH: f32 = 500.0;
const PREFERRED_THICKNESS: f32 = 100.0;

/// Discretized gradient strip widget.
///
/// Owns a [`GradientStrip`], lays its cells out along [`Orientation`],
/// paints them (plus mark handles and any registered [`CellRenderer`]s) and
/// turns pointer events into cell-level callbacks on registered
/// [`DegradeeListener`]s.
///
/// The widget remembers the rect it was last painted or routed with, so
/// hit-testing helpers like [`index_at`](Self::index_at) work from inside
/// listener callbacks.
///
/// # Example
/// ```rust,ignore
/// let mut strip = Degradee::new();
/// strip.add_renderer(IndexRenderer::new(font, 12.0));
/// strip.add_listener(StandardAdapter::new("edit", "delete", chooser, menu));
/// ```
pub struct Degradee {
    strip: GradientStrip,
    orientation: Orientation,
    grid_visible: bool,
    grid_line_color: Color,
    mark_size: f32,
    listeners: Registry<SharedListener>,
    renderers: Registry<SharedRenderer>,
    bounds: Cell<Rect>,
    redraw_requested: bool,
}

impl Degradee {
    /// Widget built from [`DegradeeConfig::default`].
    pub fn new() -> Self {
        let config = DegradeeConfig::default();
        let mut degradee = Self::unmarked(GradientStrip::default(), &config);
        if let Err(err) = degradee.place_marks(&config.initial_marks) {
            log::error!("default marks rejected: {err}");
        }
        degradee
    }

    /// Validates `config` and builds the widget.
    pub fn from_config(config: DegradeeConfig) -> Result<Self, DegradeeError> {
        let strip = GradientStrip::new(config.cell_count, config.primary_color, config.secondary_color)?;
        let mut degradee = Self::unmarked(strip, &config);
        degradee.place_marks(&config.initial_marks)?;
        Ok(degradee)
    }

    fn unmarked(strip: GradientStrip, config: &DegradeeConfig) -> Self {
        Self {
            strip,
            orientation: config.orientation,
            grid_visible: config.grid_visible,
            grid_line_color: config.grid_line_color,
            mark_size: config.mark_size,
            listeners: Registry::new(),
            renderers: Registry::new(),
            bounds: Cell::new(Rect::default()),
            redraw_requested: true,
        }
    }

    fn place_marks(&mut self, marks: &[InitialMark]) -> Result<(), DegradeeError> {
        for mark in marks {
            self.strip.set_mark_by_ratio(mark.ratio, Some(mark.color))?;
        }
        Ok(())
    }

    // ── strip state ───────────────────────────────────────────────────────

    #[inline]
    pub fn strip(&self) -> &GradientStrip {
        &self.strip
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.strip.cell_count()
    }

    /// Resizes the strip, remapping marks; see [`GradientStrip::set_cell_count`].
    pub fn set_cell_count(&mut self, cell_count: usize) -> Result<(), DegradeeError> {
        self.strip.set_cell_count(cell_count)?;
        self.request_redraw();
        Ok(())
    }

    #[inline]
    pub fn primary_color(&self) -> Color {
        self.strip.primary_color()
    }

    pub fn set_primary_color(&mut self, color: Color) {
        self.strip.set_primary_color(color);
        self.request_redraw();
    }

    #[inline]
    pub fn secondary_color(&self) -> Color {
        self.strip.secondary_color()
    }

    pub fn set_secondary_color(&mut self, color: Color) {
        self.strip.set_secondary_color(color);
        self.request_redraw();
    }

    pub fn set_mark(&mut self, index: usize, color: Option<Color>) -> Result<Option<Color>, DegradeeError> {
        let previous = self.strip.set_mark(index, color)?;
        self.request_redraw();
        Ok(previous)
    }

    pub fn clear_mark(&mut self, index: usize) -> Result<Option<Color>, DegradeeError> {
        self.set_mark(index, None)
    }

    pub fn set_mark_by_ratio(&mut self, ratio: f64, color: Option<Color>) -> Result<usize, DegradeeError> {
        let index = self.strip.set_mark_by_ratio(ratio, color)?;
        self.request_redraw();
        Ok(index)
    }

    #[inline]
    pub fn has_mark(&self, index: usize) -> bool {
        self.strip.has_mark(index)
    }

    pub fn mark_at(&self, index: usize) -> Result<Option<Color>, DegradeeError> {
        self.strip.mark_at(index)
    }

    pub fn color_at(&self, index: usize) -> Result<Color, DegradeeError> {
        self.strip.color_at(index)
    }

    pub fn color_at_ratio(&self, ratio: f64) -> Result<Color, DegradeeError> {
        self.strip.color_at_ratio(ratio)
    }

    // ── presentation ──────────────────────────────────────────────────────

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.request_redraw();
    }

    #[inline]
    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    pub fn set_grid_visible(&mut self, visible: bool) {
        self.grid_visible = visible;
        self.request_redraw();
    }

    #[inline]
    pub fn grid_line_color(&self) -> Color {
        self.grid_line_color
    }

    pub fn set_grid_line_color(&mut self, color: Color) {
        self.grid_line_color = color;
        self.request_redraw();
    }

    #[inline]
    pub fn mark_size(&self) -> f32 {
        self.mark_size
    }

    pub fn set_mark_size(&mut self, size: f32) {
        self.mark_size = size;
        self.request_redraw();
    }

    /// `true` when state changed since the host last took the request.
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Returns and resets the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Rect the widget was last painted or routed with.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    /// Cell layout inside `rect` with the current orientation and count.
    pub fn layout(&self, rect: Rect) -> GeometryMapper {
        GeometryMapper::for_strip(&self.strip, self.orientation, rect)
    }

    fn mapper(&self) -> GeometryMapper {
        self.layout(self.bounds.get())
    }

    pub fn cell_bounds(&self, index: usize) -> Rect {
        self.mapper().cell_bounds(index)
    }

    /// Handle square of the mark at `index`, `None` for unmarked cells.
    pub fn mark_bounds(&self, index: usize) -> Option<Rect> {
        self.mapper().mark_handle_bounds(&self.strip, index, self.mark_size)
    }

    /// Cell under `pos`, if any.
    pub fn index_at(&self, pos: Vec2) -> Option<usize> {
        self.mapper().index_at(pos)
    }

    /// Mark whose handle is under `pos`, if any.
    pub fn mark_index_at(&self, pos: Vec2) -> Option<usize> {
        self.mapper().mark_index_at(&self.strip, pos, self.mark_size)
    }

    // ── listeners ─────────────────────────────────────────────────────────

    pub fn add_listener<L: DegradeeListener + 'static>(&mut self, listener: L) -> ListenerId {
        self.add_shared_listener(Rc::new(RefCell::new(listener)))
    }

    /// Registers a listener the caller keeps a handle to.
    pub fn add_shared_listener(&mut self, listener: SharedListener) -> ListenerId {
        let id = ListenerId(self.listeners.insert(listener));
        log::debug!("listener {:?} registered ({} total)", id, self.listeners.len());
        id
    }

    /// Unregisters `id`. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.remove(id.0);
        if removed {
            log::debug!("listener {:?} removed", id);
        }
        removed
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    #[inline]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ── renderers ─────────────────────────────────────────────────────────

    pub fn add_renderer<R: CellRenderer + 'static>(&mut self, renderer: R) -> RendererId {
        self.add_shared_renderer(Rc::new(renderer))
    }

    pub fn add_shared_renderer(&mut self, renderer: SharedRenderer) -> RendererId {
        let id = RendererId(self.renderers.insert(renderer));
        log::debug!("renderer {:?} registered ({} total)", id, self.renderers.len());
        self.request_redraw();
        id
    }

    pub fn remove_renderer(&mut self, id: RendererId) -> bool {
        let removed = self.renderers.remove(id.0);
        if removed {
            self.request_redraw();
        }
        removed
    }

    pub fn clear_renderers(&mut self) {
        self.renderers.clear();
        self.request_redraw();
    }

    #[inline]
    pub fn renderer_count(&self) -> usize {
        self.renderers.len()
    }

    // ── dispatch ──────────────────────────────────────────────────────────

    /// Resolves `event` to a cell and notifies a snapshot of the listeners.
    ///
    /// Enter / exit / wheel are always delivered. Every other kind is
    /// dropped when the pointer is over no cell.
    fn dispatch(&mut self, event: &UiEvent) -> EventResult {
        let hit = match event {
            UiEvent::Entered(_) | UiEvent::Exited(_) | UiEvent::Wheel(_) => None,
            UiEvent::Clicked(p)
            | UiEvent::Pressed(p)
            | UiEvent::Released(p)
            | UiEvent::Dragged(p)
            | UiEvent::Moved(p) => {
                let Some(index) = self.index_at(p.pos) else {
                    return EventResult::Ignored;
                };
                let Ok(color) = self.strip.color_at(index) else {
                    return EventResult::Ignored;
                };
                Some((index, color))
            }
        };

        let snapshot = self.listeners.snapshot();
        log::trace!("dispatching {:?} at {:?} to {} listener(s)", event, hit, snapshot.len());

        let mut delivered = false;
        for shared in &snapshot {
            let Ok(mut listener) = shared.try_borrow_mut() else {
                log::trace!("skipping listener already inside a callback");
                continue;
            };
            delivered = true;
            match (event, hit) {
                (UiEvent::Clicked(p), Some((i, c))) => listener.clicked(self, i, c, p),
                (UiEvent::Pressed(p), Some((i, c))) => listener.pressed(self, i, c, p),
                (UiEvent::Released(p), Some((i, c))) => listener.released(self, i, c, p),
                (UiEvent::Dragged(p), Some((i, c))) => listener.dragged(self, i, c, p),
                (UiEvent::Moved(p), Some((i, c))) => listener.moved(self, i, c, p),
                (UiEvent::Entered(p), _) => listener.entered(self, p),
                (UiEvent::Exited(p), _) => listener.exited(self, p),
                (UiEvent::Wheel(w), _) => listener.wheel_moved(self, w),
                (
                    UiEvent::Clicked(_)
                    | UiEvent::Pressed(_)
                    | UiEvent::Released(_)
                    | UiEvent::Dragged(_)
                    | UiEvent::Moved(_),
                    None,
                ) => {
                    // Cell events with no hit returned before the loop.
                }
            }
        }

        if hit.is_some() && delivered {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

impl Default for Degradee {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Degradee {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let cell = self
            .renderers
            .iter()
            .map(|r| r.min_cell_size(self, ctx))
            .fold(Vec2::zero(), |a, b| Vec2::new(a.x.max(b.x), a.y.max(b.y)));
        let cells = self.strip.cell_count() as f32;

        let fill = |max: f32, fallback: f32| if max.is_finite() { max } else { fallback };
        let size = match self.orientation {
            Orientation::Horizontal => Vec2::new(
                fill(constraints.max.x, PREFERRED_LENGTH).max(cell.x * cells),
                PREFERRED_THICKNESS.max(cell.y),
            ),
            Orientation::Vertical => Vec2::new(
                PREFERRED_THICKNESS.max(cell.x),
                fill(constraints.max.y, PREFERRED_LENGTH).max(cell.y * cells),
            ),
        };
        constraints.constrain(size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.bounds.set(rect);
        let mapper = self.layout(rect);

        for ((index, cell), color) in mapper.cells().zip(self.strip.colors()) {
            painter.fill_rect(cell, color);
            if self.grid_visible {
                painter.stroke_rect(cell, GRID_LINE_WIDTH, self.grid_line_color);
            }
            for renderer in self.renderers.iter() {
                renderer.render(self, painter, cell, index);
            }
        }

        // Handles go on top of every cell so wide handles are never covered
        // by a neighbour.
        for (index, color) in self.strip.marks() {
            let handle = mapper.handle_bounds(index, self.mark_size);
            painter.fill_rect(handle, color);
            painter.stroke_rect(handle, GRID_LINE_WIDTH, self.grid_line_color);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        self.bounds.set(rect);
        self.dispatch(event)
    }
}
