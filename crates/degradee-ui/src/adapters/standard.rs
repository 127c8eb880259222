use degradee_engine::coords::Vec2;
use degradee_engine::input::{MouseButton, PointerEvent};
use degradee_engine::paint::Color;

use crate::listener::DegradeeListener;
use crate::widgets::degradee::Degradee;

/// Host color dialog. `None` means the user cancelled.
pub trait ColorChooser {
    fn choose(&mut self, initial: Color) -> Option<Color>;
}

impl<F: FnMut(Color) -> Option<Color>> ColorChooser for F {
    fn choose(&mut self, initial: Color) -> Option<Color> {
        self(initial)
    }
}

/// What the mark context menu can do.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MarkAction {
    Delete,
    Edit,
}

/// One line of the mark context menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub label: String,
    pub action: MarkAction,
}

/// Host popup menu. Shows `entries` at `at` and returns the picked action,
/// or `None` when dismissed.
pub trait MarkMenu {
    fn popup(&mut self, at: Vec2, entries: &[MenuEntry]) -> Option<MarkAction>;
}

impl<F: FnMut(Vec2, &[MenuEntry]) -> Option<MarkAction>> MarkMenu for F {
    fn popup(&mut self, at: Vec2, entries: &[MenuEntry]) -> Option<MarkAction> {
        self(at, entries)
    }
}

/// Default editing policy for a [`Degradee`].
///
/// - Primary double-click on an unmarked cell asks the chooser for a color,
///   seeded with the cell's current color, and marks the cell with it.
/// - A context trigger from the secondary button over a mark handle pops a
///   two-entry menu: delete the mark, or edit it through the chooser.
///
/// Platforms raise the context trigger on press, release or click, so all
/// three are checked.
pub struct StandardAdapter<C, M> {
    entries: [MenuEntry; 2],
    chooser: C,
    menu: M,
}

impl<C: ColorChooser, M: MarkMenu> StandardAdapter<C, M> {
    pub fn new(edit_label: impl Into<String>, delete_label: impl Into<String>, chooser: C, menu: M) -> Self {
        Self {
            entries: [
                MenuEntry { label: delete_label.into(), action: MarkAction::Delete },
                MenuEntry { label: edit_label.into(), action: MarkAction::Edit },
            ],
            chooser,
            menu,
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    fn try_mark_creation(&mut self, degradee: &mut Degradee, index: usize, color: Color, event: &PointerEvent) {
        if event.click_count != 2 || degradee.has_mark(index) {
            return;
        }
        let Some(chosen) = self.chooser.choose(color) else {
            return;
        };
        if let Err(err) = degradee.set_mark(index, Some(chosen)) {
            log::warn!("mark creation at {index} failed: {err}");
        }
    }

    fn try_mark_menu(&mut self, degradee: &mut Degradee, event: &PointerEvent) {
        if !event.button.is_some_and(MouseButton::is_secondary) || !event.context_trigger {
            return;
        }
        let Some(index) = degradee.mark_index_at(event.pos) else {
            return;
        };

        let result = match self.menu.popup(event.pos, &self.entries) {
            Some(MarkAction::Delete) => degradee.clear_mark(index).map(drop),
            Some(MarkAction::Edit) => {
                let current = degradee.mark_at(index).ok().flatten();
                match current.and_then(|c| self.chooser.choose(c)) {
                    Some(chosen) => degradee.set_mark(index, Some(chosen)).map(drop),
                    None => Ok(()),
                }
            }
            None => Ok(()),
        };
        if let Err(err) = result {
            log::warn!("mark menu action at {index} failed: {err}");
        }
    }
}

impl<C: ColorChooser, M: MarkMenu> DegradeeListener for StandardAdapter<C, M> {
    fn clicked(&mut self, degradee: &mut Degradee, index: usize, color: Color, event: &PointerEvent) {
        if event.button.is_some_and(MouseButton::is_primary) {
            self.try_mark_creation(degradee, index, color, event);
        } else {
            self.try_mark_menu(degradee, event);
        }
    }

    fn pressed(&mut self, degradee: &mut Degradee, _index: usize, _color: Color, event: &PointerEvent) {
        self.try_mark_menu(degradee, event);
    }

    fn released(&mut self, degradee: &mut Degradee, _index: usize, _color: Color, event: &PointerEvent) {
        self.try_mark_menu(degradee, event);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::config::DegradeeConfig;
    use crate::event::UiEvent;
    use crate::widget::Widget;
    use degradee_engine::coords::Rect;

    // 11 cells of 50 x 100; cell 5 spans x 250..300, handle 270..280 x 45..55.
    const RECT: Rect = Rect::new(0.0, 0.0, 550.0, 100.0);

    type Calls<T> = Rc<RefCell<Vec<T>>>;

    struct Harness {
        degradee: Degradee,
        chooser_seen: Calls<Color>,
        menu_seen: Calls<Vec<String>>,
    }

    fn harness(marked: bool, pick: Option<Color>, action: Option<MarkAction>) -> Harness {
        let config = if marked { DegradeeConfig::default() } else { DegradeeConfig::default().no_marks() };
        let mut degradee = Degradee::from_config(config).unwrap();

        let chooser_seen: Calls<Color> = Rc::default();
        let menu_seen: Calls<Vec<String>> = Rc::default();
        let seen = chooser_seen.clone();
        let chooser = move |initial: Color| {
            seen.borrow_mut().push(initial);
            pick
        };
        let seen = menu_seen.clone();
        let menu = move |_at: Vec2, entries: &[MenuEntry]| {
            seen.borrow_mut().push(entries.iter().map(|e| e.label.clone()).collect());
            action
        };
        degradee.add_listener(StandardAdapter::new("edit mark", "delete mark", chooser, menu));
        Harness { degradee, chooser_seen, menu_seen }
    }

    fn left(x: f32, y: f32, clicks: u32) -> UiEvent {
        UiEvent::Clicked(PointerEvent::at(x, y).button(MouseButton::Left).clicks(clicks))
    }

    fn context_press(x: f32, y: f32) -> UiEvent {
        UiEvent::Pressed(PointerEvent::at(x, y).button(MouseButton::Right).clicks(1).context_trigger(true))
    }

    // ── creation ──────────────────────────────────────────────────────────

    #[test]
    fn double_click_creates_mark_with_chosen_color() {
        let mut h = harness(false, Some(Color::GREEN), None);
        h.degradee.on_event(&left(75.0, 20.0, 2), RECT);
        assert_eq!(h.degradee.mark_at(1).unwrap(), Some(Color::GREEN));
        assert_eq!(h.degradee.color_at(1).unwrap(), Color::GREEN);
        // Chooser was seeded with the interpolated color of cell 1.
        assert_eq!(*h.chooser_seen.borrow(), vec![Color::new(230, 0, 26)]);
    }

    #[test]
    fn single_click_does_nothing() {
        let mut h = harness(false, Some(Color::GREEN), None);
        h.degradee.on_event(&left(75.0, 20.0, 1), RECT);
        assert!(!h.degradee.has_mark(1));
        assert!(h.chooser_seen.borrow().is_empty());
    }

    #[test]
    fn double_click_on_marked_cell_is_ignored_even_off_handle() {
        let mut h = harness(true, Some(Color::GREEN), None);
        h.degradee.on_event(&left(255.0, 5.0, 2), RECT);
        assert_eq!(h.degradee.mark_at(5).unwrap(), Some(Color::YELLOW));
        assert!(h.chooser_seen.borrow().is_empty());
    }

    #[test]
    fn cancelled_chooser_leaves_cell_unmarked() {
        let mut h = harness(false, None, None);
        h.degradee.on_event(&left(75.0, 20.0, 2), RECT);
        assert!(!h.degradee.has_mark(1));
        assert_eq!(h.chooser_seen.borrow().len(), 1);
    }

    // ── context menu ──────────────────────────────────────────────────────

    #[test]
    fn context_trigger_on_handle_deletes_mark() {
        let mut h = harness(true, None, Some(MarkAction::Delete));
        h.degradee.on_event(&context_press(275.0, 50.0), RECT);
        assert!(!h.degradee.has_mark(5));
        assert_eq!(h.degradee.color_at(5).unwrap(), Color::new(128, 0, 128));
        assert_eq!(
            *h.menu_seen.borrow(),
            vec![vec!["delete mark".to_string(), "edit mark".to_string()]]
        );
    }

    #[test]
    fn edit_reseeds_chooser_with_mark_color() {
        let mut h = harness(true, Some(Color::WHITE), Some(MarkAction::Edit));
        h.degradee.on_event(&context_press(275.0, 50.0), RECT);
        assert_eq!(h.degradee.mark_at(5).unwrap(), Some(Color::WHITE));
        assert_eq!(*h.chooser_seen.borrow(), vec![Color::YELLOW]);
    }

    #[test]
    fn edit_cancelled_keeps_mark() {
        let mut h = harness(true, None, Some(MarkAction::Edit));
        h.degradee.on_event(&context_press(275.0, 50.0), RECT);
        assert_eq!(h.degradee.mark_at(5).unwrap(), Some(Color::YELLOW));
    }

    #[test]
    fn context_trigger_off_handle_shows_no_menu() {
        let mut h = harness(true, None, Some(MarkAction::Delete));
        h.degradee.on_event(&context_press(255.0, 10.0), RECT);
        assert!(h.degradee.has_mark(5));
        assert!(h.menu_seen.borrow().is_empty());
    }

    #[test]
    fn secondary_without_trigger_shows_no_menu() {
        let mut h = harness(true, None, Some(MarkAction::Delete));
        let ev = UiEvent::Released(PointerEvent::at(275.0, 50.0).button(MouseButton::Right).clicks(1));
        h.degradee.on_event(&ev, RECT);
        assert!(h.degradee.has_mark(5));
        assert!(h.menu_seen.borrow().is_empty());
    }

    #[test]
    fn trigger_on_click_also_opens_menu() {
        let mut h = harness(true, None, Some(MarkAction::Delete));
        let ev = UiEvent::Clicked(
            PointerEvent::at(275.0, 50.0).button(MouseButton::Right).clicks(1).context_trigger(true),
        );
        h.degradee.on_event(&ev, RECT);
        assert!(!h.degradee.has_mark(5));
    }

    #[test]
    fn dismissed_menu_changes_nothing() {
        let mut h = harness(true, None, None);
        h.degradee.on_event(&context_press(275.0, 50.0), RECT);
        assert!(h.degradee.has_mark(5));
        assert_eq!(h.menu_seen.borrow().len(), 1);
    }
}
