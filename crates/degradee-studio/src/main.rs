use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use anyhow::{Context, Result};
use degradee_engine::logging::{init_logging, LoggingConfig};
use degradee_ui::prelude::*;

const VIEWPORT: Vec2 = Vec2::new(550.0, 100.0);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║         DEGRADEE STUDIO v0.1           ║");
    println!("  ║   headless gradient strip walkthrough  ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let cell_count = match std::env::args().nth(1) {
        Some(arg) => arg.parse().with_context(|| format!("invalid cell count {arg:?}"))?,
        None => GradientStrip::DEFAULT_CELLS,
    };

    let mut scene = UiScene::new();
    let font = load_font(&mut scene)?;

    let mut strip = Degradee::from_config(DegradeeConfig::default().cell_count(cell_count).grid(true))
        .context("building the strip")?;
    strip.add_renderer(IndexRenderer::new(font, 12.0));

    // Scripted stand-ins for the host's color dialog and popup menu.
    let picks = Rc::new(RefCell::new(VecDeque::from([Color::GREEN, Color::WHITE])));
    let actions = Rc::new(RefCell::new(VecDeque::from([MarkAction::Edit, MarkAction::Delete])));
    let chooser = {
        let picks = picks.clone();
        move |initial: Color| {
            let pick = picks.borrow_mut().pop_front();
            log::info!("color dialog opened at {initial}, answered {pick:?}");
            pick
        }
    };
    let menu = {
        let actions = actions.clone();
        move |at: Vec2, entries: &[MenuEntry]| {
            let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
            let action = actions.borrow_mut().pop_front();
            log::info!("menu {labels:?} at ({:.0}, {:.0}), answered {action:?}", at.x, at.y);
            action
        }
    };
    strip.add_listener(StandardAdapter::new("Edit mark", "Delete mark", chooser, menu));

    // Lay the strip out once so hit-testing has bounds.
    let initial = FrameSummary::of(scene.frame(&strip, VIEWPORT));
    println!("  initial frame: {initial}");
    let preferred = scene.measure(&strip, Vec2::new(f32::INFINITY, f32::INFINITY));
    println!("  preferred size: {:.0} x {:.0}", preferred.x, preferred.y);
    print_table("initial", &strip);

    // ── double-click an unmarked cell ─────────────────────────────────────
    let target = 2.min(strip.cell_count() - 1);
    let at = strip.cell_bounds(target).center();
    let double = PointerEvent::at(at.x, at.y).button(MouseButton::Left).clicks(2);
    scene.route(&mut strip, &UiEvent::Clicked(double), VIEWPORT);
    print_table("after double-click", &strip);

    // ── context menu: edit, then delete ───────────────────────────────────
    for step in ["after menu edit", "after menu delete"] {
        let Some((index, _)) = strip.strip().marks().last() else {
            println!("  no marks left to open a menu on");
            break;
        };
        let handle = strip.mark_bounds(index).context("marked cell without handle")?.center();
        let trigger = PointerEvent::at(handle.x, handle.y)
            .button(MouseButton::Right)
            .clicks(1)
            .context_trigger(true);
        scene.route(&mut strip, &UiEvent::Pressed(trigger), VIEWPORT);
        print_table(step, &strip);
    }

    // ── resize ────────────────────────────────────────────────────────────
    let resized = (strip.cell_count() * 2 - 1).min(GradientStrip::MAX_CELLS);
    strip.set_cell_count(resized).context("resizing the strip")?;
    print_table("after resize", &strip);

    // ── paint ─────────────────────────────────────────────────────────────
    if strip.take_redraw_request() {
        let last = FrameSummary::of(scene.frame(&strip, VIEWPORT));
        println!("  frame: {last}");
        println!();
    }

    Ok(())
}

/// Command tally of one recorded frame.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct FrameSummary {
    fills: usize,
    strokes: usize,
    labels: usize,
}

impl FrameSummary {
    fn of(draw_list: &mut DrawList) -> Self {
        let mut summary = Self::default();
        for cmd in draw_list.iter_in_paint_order() {
            match cmd {
                DrawCmd::FillRect(_) => summary.fills += 1,
                DrawCmd::StrokeRect(_) => summary.strokes += 1,
                DrawCmd::Text(_) => summary.labels += 1,
            }
        }
        summary
    }
}

impl std::fmt::Display for FrameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} fills, {} strokes, {} labels", self.fills, self.strokes, self.labels)
    }
}

fn print_table(title: &str, strip: &Degradee) {
    println!("  [{title}] {} cells", strip.cell_count());
    for (index, color) in strip.strip().colors().enumerate() {
        let marker = if strip.has_mark(index) { "*" } else { " " };
        println!("    {marker} {:>3} {}", IndexRenderer::label(index), color);
    }
    println!();
}

/// Loads the first system font found; text measurement falls back to a
/// fixed advance without one.
fn load_font(scene: &mut UiScene) -> Result<FontId> {
    let bytes = [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok());

    match bytes {
        Some(bytes) => scene.load_font(&bytes).context("parsing system font"),
        None => {
            log::warn!("no system font found, labels use estimated metrics");
            Ok(FontId::default())
        }
    }
}
