//! Headless demo: drives a cell with synthetic pointer events and prints
//! the delegate callbacks as they fire.
//!
//! Run with `RUST_LOG=swipe_cell=trace` to see the gesture classification
//! and state transitions the widget logs internally.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use swipe_cell::{
    CellState, Color, Point, PointerEvent, Size, SwipeCellDelegate, SwipeableCell, UtilityButton,
};

struct PrintingDelegate;

impl SwipeCellDelegate for PrintingDelegate {
    fn did_trigger_right_utility_button(&mut self, index: usize) {
        println!("-> right utility button {index} triggered");
    }

    fn scrolling_to_state(&mut self, state: CellState) {
        println!("-> scrolling to {state:?}");
    }

    fn did_end_scrolling(&mut self) {
        println!("-> settled");
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut cell = SwipeableCell::new();
    cell.set_size(Size::new(320.0, 44.0));
    cell.set_right_utility_buttons(
        vec![
            UtilityButton::new("Archive", Color::from_rgb8(199, 199, 204)),
            UtilityButton::new("Delete", Color::from_rgb8(255, 59, 48)),
        ],
        80.0,
    )
    .expect("valid button width");

    let delegate: Rc<RefCell<dyn SwipeCellDelegate>> = Rc::new(RefCell::new(PrintingDelegate));
    cell.set_delegate(&delegate);

    // Swipe the cell 120px to the left, fast enough to commit.
    let t0 = Instant::now();
    let y = 22.0;
    println!("swiping left...");
    cell.handle_pointer(&PointerEvent::pressed(Point::new(240.0, y), t0));
    for i in 1..=6u64 {
        cell.handle_pointer(&PointerEvent::moved(
            Point::new(240.0 - 20.0 * i as f32, y),
            t0 + Duration::from_millis(16 * i),
        ));
    }
    cell.handle_pointer(&PointerEvent::released(
        Point::new(120.0, y),
        t0 + Duration::from_millis(112),
    ));

    // Pump the settle animation at ~60fps.
    let mut frame = 0u64;
    while cell.is_animating() {
        frame += 1;
        cell.tick(t0 + Duration::from_millis(112 + 16 * frame));
    }
    println!(
        "state = {:?}, offset = {}, content frame at x = {}",
        cell.state(),
        cell.offset(),
        cell.content_frame().left()
    );

    // Tap the "Delete" button (right half of the revealed strip).
    println!("tapping delete...");
    let tap_at = t0 + Duration::from_secs(1);
    let pos = Point::new(250.0, y);
    cell.handle_pointer(&PointerEvent::pressed(pos, tap_at));
    cell.handle_pointer(&PointerEvent::released(pos, tap_at + Duration::from_millis(60)));

    let mut frame = 0u64;
    while cell.is_animating() {
        frame += 1;
        cell.tick(tap_at + Duration::from_millis(60 + 16 * frame));
    }
    println!("hidden again = {}", cell.is_utility_buttons_hidden());
}
