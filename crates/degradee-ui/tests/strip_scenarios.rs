//! End-to-end scenarios: a default widget driven through `UiScene` the way a
//! host toolkit would drive it.

use std::cell::RefCell;
use std::rc::Rc;

use degradee_ui::prelude::*;

const VIEWPORT: Vec2 = Vec2::new(550.0, 100.0);

fn unmarked() -> Degradee {
    Degradee::from_config(DegradeeConfig::default().no_marks()).unwrap()
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(r, g, b)
}

#[test]
fn red_to_blue_over_eleven_cells() {
    let d = unmarked();
    assert_eq!(d.color_at(0).unwrap(), rgb(255, 0, 0));
    assert_eq!(d.color_at(5).unwrap(), rgb(128, 0, 128));
    assert_eq!(d.color_at(10).unwrap(), rgb(0, 0, 255));
}

#[test]
fn yellow_at_half_lands_on_middle_cell() {
    let mut d = unmarked();
    assert_eq!(d.set_mark_by_ratio(0.5, Some(Color::YELLOW)).unwrap(), 5);
    assert_eq!(d.color_at(5).unwrap(), rgb(255, 255, 0));
    // Only a following mark exists for cell 0, so it sits on the primary.
    assert_eq!(d.color_at(0).unwrap(), Color::RED);
    // Cell 2: 2/5 of the way from red to yellow.
    assert_eq!(d.color_at(2).unwrap(), rgb(255, 102, 0));
    // Cell 8: 3/5 of the way from yellow to blue.
    assert_eq!(d.color_at(8).unwrap(), rgb(102, 102, 153));
}

#[test]
fn resize_carries_mark_to_proportional_cell() {
    let mut d = Degradee::from_config(DegradeeConfig::default().cell_count(10).no_marks()).unwrap();
    let c = rgb(12, 34, 56);
    d.set_mark(5, Some(c)).unwrap();

    d.set_cell_count(20).unwrap();

    assert!(!d.has_mark(5));
    assert_eq!(d.color_at(10).unwrap(), c);
}

#[test]
fn ratio_lookup_scales_by_cell_count() {
    let d = unmarked();
    assert_eq!(d.color_at_ratio(0.0).unwrap(), Color::RED);
    assert_eq!(d.color_at_ratio(0.9).unwrap(), d.color_at(10).unwrap());
    assert!(matches!(d.color_at_ratio(1.0), Err(DegradeeError::RatioOutOfRange { .. })));
}

// ── interactive editing ───────────────────────────────────────────────────

fn editable(pick: Color, action: MarkAction) -> (UiScene, Degradee) {
    let mut d = unmarked();
    let chooser = move |_initial: Color| Some(pick);
    let menu = move |_at: Vec2, _entries: &[MenuEntry]| Some(action);
    d.add_listener(StandardAdapter::new("Edit", "Delete", chooser, menu));
    (UiScene::new(), d)
}

#[test]
fn double_click_creates_mark() {
    let c = rgb(10, 200, 30);
    let (mut scene, mut d) = editable(c, MarkAction::Delete);

    let ev = PointerEvent::at(175.0, 30.0).button(MouseButton::Left).clicks(2);
    assert!(scene.route(&mut d, &UiEvent::Clicked(ev), VIEWPORT).is_consumed());

    assert!(d.has_mark(3));
    assert_eq!(d.color_at(3).unwrap(), c);
    assert!(d.take_redraw_request());
}

#[test]
fn context_delete_reverts_to_interpolation() {
    let (mut scene, mut d) = editable(Color::GREEN, MarkAction::Delete);
    let before = d.color_at(3).unwrap();

    let create = PointerEvent::at(175.0, 30.0).button(MouseButton::Left).clicks(2);
    scene.route(&mut d, &UiEvent::Clicked(create), VIEWPORT);
    assert_eq!(d.color_at(3).unwrap(), Color::GREEN);

    // Release-side trigger, as some platforms raise it.
    let handle = d.mark_bounds(3).unwrap().center();
    let trigger = PointerEvent::at(handle.x, handle.y).button(MouseButton::Right).clicks(1).context_trigger(true);
    scene.route(&mut d, &UiEvent::Released(trigger), VIEWPORT);

    assert!(!d.has_mark(3));
    assert_eq!(d.color_at(3).unwrap(), before);
}

#[test]
fn frame_reflects_edits() {
    let (mut scene, mut d) = editable(Color::GREEN, MarkAction::Delete);
    let idle = scene.frame(&d, VIEWPORT).len();
    assert_eq!(idle, 11);

    let create = PointerEvent::at(25.0, 50.0).button(MouseButton::Left).clicks(2);
    scene.route(&mut d, &UiEvent::Clicked(create), VIEWPORT);

    let cmds: Vec<DrawCmd> = scene.frame(&d, VIEWPORT).iter_in_paint_order().cloned().collect();
    assert_eq!(cmds.len(), 13);
    assert!(matches!(&cmds[0], DrawCmd::FillRect(f) if f.color == Color::GREEN));
}

#[test]
fn shared_listener_observes_vertical_strip() {
    #[derive(Default)]
    struct Tracker {
        last: Option<(usize, Color)>,
    }
    impl DegradeeListener for Tracker {
        fn moved(&mut self, _: &mut Degradee, index: usize, color: Color, _: &PointerEvent) {
            self.last = Some((index, color));
        }
    }

    let tracker = Rc::new(RefCell::new(Tracker::default()));
    let mut d = unmarked();
    d.set_orientation(Orientation::Vertical);
    let id = d.add_shared_listener(tracker.clone());

    let mut scene = UiScene::new();
    let tall = Vec2::new(100.0, 550.0);
    scene.route(&mut d, &UiEvent::Moved(PointerEvent::at(10.0, 540.0)), tall);
    assert_eq!(tracker.borrow().last, Some((10, Color::BLUE)));

    assert!(d.remove_listener(id));
    scene.route(&mut d, &UiEvent::Moved(PointerEvent::at(10.0, 5.0)), tall);
    assert_eq!(tracker.borrow().last.map(|(i, _)| i), Some(10));
}
