//! Integration tests driving the cell end-to-end with synthetic pointer
//! events: drag/flick commit decisions, the delegate veto, tap resolution
//! on revealed strips, and animation preemption.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use swipe_cell::{
    CellState, Color, Point, PointerEvent, Size, SwipeCellDelegate, SwipeableCell, UtilityButton,
};

/// Records every callback so tests can assert on dispatch order and payloads.
struct Recorder {
    left_triggers: Vec<usize>,
    right_triggers: Vec<usize>,
    scrolling_to: Vec<CellState>,
    offsets: Vec<f32>,
    end_count: usize,
    /// State the delegate vetoes, if any.
    deny: Option<CellState>,
    auto_hide: bool,
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            left_triggers: Vec::new(),
            right_triggers: Vec::new(),
            scrolling_to: Vec::new(),
            offsets: Vec::new(),
            end_count: 0,
            deny: None,
            auto_hide: true,
        }
    }
}

impl SwipeCellDelegate for Recorder {
    fn did_trigger_left_utility_button(&mut self, index: usize) {
        self.left_triggers.push(index);
    }

    fn did_trigger_right_utility_button(&mut self, index: usize) {
        self.right_triggers.push(index);
    }

    fn scrolling_to_state(&mut self, state: CellState) {
        self.scrolling_to.push(state);
    }

    fn should_hide_utility_buttons_on_swipe(&mut self) -> bool {
        self.auto_hide
    }

    fn can_swipe_to_state(&mut self, state: CellState) -> bool {
        self.deny != Some(state)
    }

    fn did_end_scrolling(&mut self) {
        self.end_count += 1;
    }

    fn did_scroll(&mut self, offset: f32) {
        self.offsets.push(offset);
    }
}

fn buttons(n: usize) -> Vec<UtilityButton> {
    (0..n)
        .map(|i| UtilityButton::new(format!("b{i}"), Color::GRAY))
        .collect()
}

/// A 320x44 cell with 80px-wide buttons on each side.
fn cell_with_strips(left: usize, right: usize) -> (SwipeableCell, Rc<RefCell<Recorder>>) {
    let mut cell = SwipeableCell::new();
    cell.set_size(Size::new(320.0, 44.0));
    cell.set_left_utility_buttons(buttons(left), 80.0).unwrap();
    cell.set_right_utility_buttons(buttons(right), 80.0).unwrap();

    let recorder = Rc::new(RefCell::new(Recorder::default()));
    let delegate: Rc<RefCell<dyn SwipeCellDelegate>> = recorder.clone();
    cell.set_delegate(&delegate);
    // `recorder` shares the allocation, so the weak reference stays valid
    (cell, recorder)
}

fn ms(base: Instant, millis: u64) -> Instant {
    base + Duration::from_millis(millis)
}

/// Drag horizontally from `from_x` to `to_x` with evenly spaced moves.
/// `step_ms` controls release velocity: short steps flick, long steps creep.
fn drag(cell: &mut SwipeableCell, from_x: f32, to_x: f32, steps: u32, step_ms: u64, t0: Instant) {
    let y = 22.0;
    cell.handle_pointer(&PointerEvent::pressed(Point::new(from_x, y), t0));
    for i in 1..=steps {
        let x = from_x + (to_x - from_x) * i as f32 / steps as f32;
        cell.handle_pointer(&PointerEvent::moved(
            Point::new(x, y),
            ms(t0, step_ms * i as u64),
        ));
    }
    cell.handle_pointer(&PointerEvent::released(
        Point::new(to_x, y),
        ms(t0, step_ms * (steps as u64 + 1)),
    ));
}

/// Run the settle animation to completion.
fn finish_animation(cell: &mut SwipeableCell, t0: Instant) {
    let mut frame = 0;
    while cell.is_animating() {
        frame += 1;
        cell.tick(ms(t0, 10_000 + frame * 16));
        assert!(frame < 1_000, "settle animation failed to terminate");
    }
}

#[test]
fn slow_drag_past_threshold_reveals_left_strip() {
    let (mut cell, recorder) = cell_with_strips(2, 0);
    let t0 = Instant::now();

    // 100px rightward creep: past the 80px (50% of 160) threshold, far too
    // slow to register as a flick.
    drag(&mut cell, 10.0, 110.0, 5, 100, t0);
    finish_animation(&mut cell, t0);

    assert_eq!(cell.state(), CellState::LeftRevealed);
    assert_eq!(cell.offset(), 160.0);

    let rec = recorder.borrow();
    assert_eq!(rec.scrolling_to, vec![CellState::LeftRevealed]);
    assert_eq!(rec.end_count, 1);
    assert!(!rec.offsets.is_empty(), "did_scroll must fire during drags");
}

#[test]
fn slow_release_below_threshold_bounces_back() {
    let (mut cell, recorder) = cell_with_strips(0, 2);
    let t0 = Instant::now();

    // 48px leftward creep: 30% of the 160px right strip, threshold is 50%.
    drag(&mut cell, 200.0, 152.0, 4, 100, t0);
    finish_animation(&mut cell, t0);

    assert_eq!(cell.state(), CellState::Centered);
    assert_eq!(cell.offset(), 0.0);
    assert_eq!(recorder.borrow().scrolling_to, vec![CellState::Centered]);
}

#[test]
fn fast_flick_commits_despite_short_distance() {
    let (mut cell, recorder) = cell_with_strips(0, 2);
    let t0 = Instant::now();

    // Only 40px of travel (25% of the strip) but at ~500px/s.
    drag(&mut cell, 200.0, 160.0, 4, 16, t0);
    finish_animation(&mut cell, t0);

    assert_eq!(cell.state(), CellState::RightRevealed);
    assert_eq!(cell.offset(), -160.0);
    assert_eq!(
        recorder.borrow().scrolling_to,
        vec![CellState::RightRevealed]
    );
}

#[test]
fn rightward_flick_closes_revealed_right_strip() {
    let (mut cell, recorder) = cell_with_strips(0, 2);
    let t0 = Instant::now();

    cell.show_right_utility_buttons(false, t0);
    recorder.borrow_mut().scrolling_to.clear();

    drag(&mut cell, 100.0, 140.0, 4, 16, ms(t0, 1_000));
    finish_animation(&mut cell, t0);

    assert_eq!(cell.state(), CellState::Centered);
    assert_eq!(recorder.borrow().scrolling_to, vec![CellState::Centered]);
}

#[test]
fn delegate_veto_forces_bounce_back() {
    let (mut cell, recorder) = cell_with_strips(0, 2);
    recorder.borrow_mut().deny = Some(CellState::RightRevealed);
    let t0 = Instant::now();

    // 120px leftward creep: well past the positional threshold.
    drag(&mut cell, 250.0, 130.0, 5, 100, t0);
    finish_animation(&mut cell, t0);

    assert_eq!(cell.state(), CellState::Centered);
    let rec = recorder.borrow();
    assert_eq!(rec.scrolling_to, vec![CellState::Centered]);
    assert!(!rec.scrolling_to.contains(&CellState::RightRevealed));
}

#[test]
fn drag_offset_is_clamped_to_strip_widths() {
    let (mut cell, _recorder) = cell_with_strips(1, 0);
    let t0 = Instant::now();

    cell.handle_pointer(&PointerEvent::pressed(Point::new(50.0, 22.0), t0));
    // Way past the 80px left strip; offset must pin at its width
    cell.handle_pointer(&PointerEvent::moved(Point::new(300.0, 22.0), ms(t0, 16)));
    assert_eq!(cell.offset(), 80.0);

    // No right strip: dragging left of center pins at zero
    cell.handle_pointer(&PointerEvent::moved(Point::new(10.0, 22.0), ms(t0, 32)));
    assert_eq!(cell.offset(), 0.0);

    cell.handle_pointer(&PointerEvent::released(Point::new(10.0, 22.0), ms(t0, 48)));
}

#[test]
fn tap_on_revealed_left_button_resolves_index() {
    let (mut cell, recorder) = cell_with_strips(2, 0);
    let t0 = Instant::now();

    cell.show_left_utility_buttons(false, t0);
    recorder.borrow_mut().scrolling_to.clear();

    // x=90 with 80px buttons lands on button 1
    let pos = Point::new(90.0, 22.0);
    cell.handle_pointer(&PointerEvent::pressed(pos, ms(t0, 100)));
    cell.handle_pointer(&PointerEvent::released(pos, ms(t0, 160)));

    assert_eq!(recorder.borrow().left_triggers, vec![1]);

    // Default policy auto-hides after the trigger
    finish_animation(&mut cell, t0);
    assert_eq!(cell.state(), CellState::Centered);
    assert_eq!(recorder.borrow().scrolling_to, vec![CellState::Centered]);
}

#[test]
fn tap_keeps_strip_open_when_auto_hide_disabled() {
    let (mut cell, recorder) = cell_with_strips(2, 0);
    recorder.borrow_mut().auto_hide = false;
    let t0 = Instant::now();

    cell.show_left_utility_buttons(false, t0);

    let pos = Point::new(10.0, 22.0);
    cell.handle_pointer(&PointerEvent::pressed(pos, ms(t0, 100)));
    cell.handle_pointer(&PointerEvent::released(pos, ms(t0, 160)));

    assert_eq!(recorder.borrow().left_triggers, vec![0]);
    assert!(!cell.is_animating());
    assert_eq!(cell.state(), CellState::LeftRevealed);
}

#[test]
fn tap_on_content_closes_revealed_strip_without_trigger() {
    let (mut cell, recorder) = cell_with_strips(0, 1);
    let t0 = Instant::now();

    cell.show_right_utility_buttons(false, t0);

    // Right strip occupies [240, 320); x=100 is cell content
    let pos = Point::new(100.0, 22.0);
    cell.handle_pointer(&PointerEvent::pressed(pos, ms(t0, 100)));
    cell.handle_pointer(&PointerEvent::released(pos, ms(t0, 160)));
    finish_animation(&mut cell, t0);

    let rec = recorder.borrow();
    assert!(rec.right_triggers.is_empty());
    assert_eq!(cell.state(), CellState::Centered);
}

#[test]
fn tap_on_revealed_right_button_resolves_index() {
    let (mut cell, recorder) = cell_with_strips(0, 2);
    let t0 = Instant::now();

    cell.show_right_utility_buttons(false, t0);

    // Right strip occupies [160, 320); x=250 is strip-local 90 -> button 1
    let pos = Point::new(250.0, 22.0);
    cell.handle_pointer(&PointerEvent::pressed(pos, ms(t0, 100)));
    cell.handle_pointer(&PointerEvent::released(pos, ms(t0, 160)));

    assert_eq!(recorder.borrow().right_triggers, vec![1]);
}

#[test]
fn tap_while_centered_is_ignored() {
    let (mut cell, recorder) = cell_with_strips(2, 2);
    let t0 = Instant::now();

    let pos = Point::new(50.0, 22.0);
    cell.handle_pointer(&PointerEvent::pressed(pos, t0));
    cell.handle_pointer(&PointerEvent::released(pos, ms(t0, 60)));

    let rec = recorder.borrow();
    assert!(rec.left_triggers.is_empty());
    assert!(rec.scrolling_to.is_empty());
    assert_eq!(cell.state(), CellState::Centered);
}

#[test]
fn new_press_preempts_settle_and_reanchors() {
    let (mut cell, _recorder) = cell_with_strips(2, 0);
    let t0 = Instant::now();

    cell.show_left_utility_buttons(true, t0);
    cell.tick(ms(t0, 60));
    let interrupted_at = cell.offset();
    assert!(interrupted_at > 0.0 && interrupted_at < 160.0);

    // Touch down mid-animation: the cell freezes and follows the finger
    cell.handle_pointer(&PointerEvent::pressed(Point::new(200.0, 22.0), ms(t0, 70)));
    assert!(!cell.is_animating());
    assert_eq!(cell.offset(), interrupted_at);

    cell.handle_pointer(&PointerEvent::moved(Point::new(230.0, 22.0), ms(t0, 86)));
    assert_eq!(cell.offset(), (interrupted_at + 30.0).min(160.0));

    cell.handle_pointer(&PointerEvent::released(Point::new(230.0, 22.0), ms(t0, 200)));
    finish_animation(&mut cell, t0);
    assert!(!cell.is_animating());
}

#[test]
fn cancelled_gesture_settles_by_position() {
    let (mut cell, _recorder) = cell_with_strips(2, 0);
    let t0 = Instant::now();

    // Drag just short of the threshold, then the host steals the touch
    cell.handle_pointer(&PointerEvent::pressed(Point::new(10.0, 22.0), t0));
    cell.handle_pointer(&PointerEvent::moved(Point::new(60.0, 22.0), ms(t0, 100)));
    cell.handle_pointer(&PointerEvent::cancelled(Point::new(60.0, 22.0), ms(t0, 120)));
    finish_animation(&mut cell, t0);

    assert_eq!(cell.state(), CellState::Centered);
    assert_eq!(cell.offset(), 0.0);
}

#[test]
fn dropped_delegate_makes_dispatch_a_noop() {
    let mut cell = SwipeableCell::new();
    cell.set_size(Size::new(320.0, 44.0));
    cell.set_left_utility_buttons(buttons(2), 80.0).unwrap();

    let t0 = Instant::now();
    {
        let delegate: Rc<RefCell<dyn SwipeCellDelegate>> =
            Rc::new(RefCell::new(Recorder::default()));
        cell.set_delegate(&delegate);
        cell.show_left_utility_buttons(true, t0);
        // Delegate dropped here, mid-animation
    }

    finish_animation(&mut cell, t0);
    assert_eq!(cell.state(), CellState::LeftRevealed);
}
