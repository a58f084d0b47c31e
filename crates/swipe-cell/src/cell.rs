//! The swipeable cell widget.
//!
//! [`SwipeableCell`] tracks one list row's horizontal offset. Dragging the
//! row reveals the utility button strip on the opposite side; releasing
//! either commits to the revealed state or springs back to centered. The
//! widget consumes raw pointer events and exposes frames for the host to
//! paint; see the crate docs for the event/tick contract.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use crate::animation::{Easing, SettleAnimation};
use crate::button::{ButtonStrip, UtilityButton};
use crate::delegate::SwipeCellDelegate;
use crate::error::SwipeCellError;
use crate::events::{PointerEvent, PointerPhase};
use crate::scroller::{DragOutcome, DragTracker};
use crate::types::{Point, Rect, Size};

/// Default maximum movement for a tap in pixels.
///
/// Movement beyond this threshold commits the gesture to dragging.
pub const DEFAULT_DRAG_SLOP: f32 = 10.0;

/// Default minimum horizontal release velocity for a flick, in pixels per
/// second. A flick commits to the state in its direction of travel even
/// when the positional threshold was not reached.
pub const DEFAULT_FLICK_VELOCITY: f32 = 300.0;

/// Default fraction of a strip's width the offset must cross for a slow
/// release to commit to the revealed state instead of bouncing back.
pub const DEFAULT_REVEAL_FRACTION: f32 = 0.5;

/// Default settle animation duration in milliseconds.
pub const DEFAULT_SETTLE_DURATION_MS: u64 = 250;

/// Resting state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// No buttons visible; offset is zero.
    #[default]
    Centered,
    /// The left utility strip is revealed (cell content pushed right).
    LeftRevealed,
    /// The right utility strip is revealed (cell content pushed left).
    RightRevealed,
}

/// Tunable gesture and animation thresholds.
///
/// The defaults match common swipe-to-reveal feel; hosts with unusual row
/// sizes or pointer hardware can override them at construction or through
/// [`SwipeableCell::set_config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Maximum movement for a tap; beyond it the gesture is a drag.
    pub drag_slop: f32,
    /// Minimum release speed for a flick, px/s.
    pub flick_velocity: f32,
    /// Fraction of strip width that commits a slow release to a reveal.
    pub reveal_fraction: f32,
    /// Duration of the settle animation.
    pub settle_duration: Duration,
    /// Easing curve for the settle animation.
    pub easing: Easing,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            drag_slop: DEFAULT_DRAG_SLOP,
            flick_velocity: DEFAULT_FLICK_VELOCITY,
            reveal_fraction: DEFAULT_REVEAL_FRACTION,
            settle_duration: Duration::from_millis(DEFAULT_SETTLE_DURATION_MS),
            easing: Easing::EaseOutCubic,
        }
    }
}

/// A list-row widget whose content slides horizontally to reveal utility
/// buttons on either side.
///
/// # Event contract
///
/// The host feeds pointer events via [`handle_pointer`](Self::handle_pointer)
/// and, while [`is_animating`](Self::is_animating) reports `true`, calls
/// [`tick`](Self::tick) once per frame. All delegate callbacks fire
/// synchronously from inside those calls, on the caller's thread.
///
/// # Delegate ownership
///
/// The delegate is held weakly; the installing controller keeps the
/// [`Rc`] alive. After the controller drops it, the cell keeps working and
/// every callback dispatch is a no-op.
pub struct SwipeableCell {
    /// Cell bounds assigned by the host layout.
    size: Size,
    /// Left utility strip (possibly empty).
    left: ButtonStrip,
    /// Right utility strip (possibly empty).
    right: ButtonStrip,
    /// Current horizontal content offset. Positive reveals the left strip.
    offset: f32,
    /// Last committed resting state.
    state: CellState,
    /// Drag/tap classifier for the active pointer.
    tracker: DragTracker,
    /// Settle animation toward the next resting offset.
    settle: SettleAnimation,
    /// State to commit when the running settle completes.
    pending_state: Option<CellState>,
    /// Gesture thresholds.
    config: SwipeConfig,
    /// Non-owning delegate reference.
    delegate: Option<Weak<RefCell<dyn SwipeCellDelegate>>>,
}

impl SwipeableCell {
    /// Create a cell with default thresholds.
    pub fn new() -> Self {
        Self::with_config(SwipeConfig::default())
    }

    /// Create a cell with custom thresholds.
    pub fn with_config(config: SwipeConfig) -> Self {
        Self {
            size: Size::ZERO,
            left: ButtonStrip::empty(),
            right: ButtonStrip::empty(),
            offset: 0.0,
            state: CellState::Centered,
            tracker: DragTracker::new(config.drag_slop),
            settle: SettleAnimation::new(config.easing, config.settle_duration),
            pending_state: None,
            config,
            delegate: None,
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Get the gesture thresholds.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Replace the gesture thresholds. Takes effect on the next gesture or
    /// transition.
    pub fn set_config(&mut self, config: SwipeConfig) {
        self.tracker.set_slop(config.drag_slop);
        self.settle.set_easing(config.easing);
        self.settle.set_duration(config.settle_duration);
        self.config = config;
    }

    /// Install the delegate. Only a weak reference is kept; the caller owns
    /// the delegate's lifetime.
    pub fn set_delegate(&mut self, delegate: &Rc<RefCell<dyn SwipeCellDelegate>>) {
        self.delegate = Some(Rc::downgrade(delegate));
    }

    /// Remove the delegate.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Set the cell bounds. The host layout calls this before routing
    /// pointer events; strip frames and tap resolution depend on it.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Get the cell bounds.
    pub fn size(&self) -> Size {
        self.size
    }

    // =========================================================================
    // Utility buttons
    // =========================================================================

    /// Replace the left utility buttons atomically.
    ///
    /// `button_width` must be positive and finite; an empty sequence is
    /// valid and means "no buttons on that side".
    pub fn set_left_utility_buttons(
        &mut self,
        buttons: Vec<UtilityButton>,
        button_width: f32,
    ) -> Result<(), SwipeCellError> {
        self.left = ButtonStrip::new(buttons, button_width)?;
        self.reanchor_after_strip_change();
        Ok(())
    }

    /// Replace the right utility buttons atomically.
    pub fn set_right_utility_buttons(
        &mut self,
        buttons: Vec<UtilityButton>,
        button_width: f32,
    ) -> Result<(), SwipeCellError> {
        self.right = ButtonStrip::new(buttons, button_width)?;
        self.reanchor_after_strip_change();
        Ok(())
    }

    /// The left strip.
    pub fn left_strip(&self) -> &ButtonStrip {
        &self.left
    }

    /// The right strip.
    pub fn right_strip(&self) -> &ButtonStrip {
        &self.right
    }

    /// The left buttons, in layout order.
    pub fn left_utility_buttons(&self) -> &[UtilityButton] {
        self.left.buttons()
    }

    /// The right buttons, in layout order.
    pub fn right_utility_buttons(&self) -> &[UtilityButton] {
        self.right.buttons()
    }

    // =========================================================================
    // State & offset
    // =========================================================================

    /// Last committed resting state. During a drag or settle this remains
    /// the state the cell last rested in; it changes when a transition
    /// commits.
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Current horizontal content offset. Positive values reveal the left
    /// strip, negative the right.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// `true` iff the cell rests centered with no buttons visible.
    pub fn is_utility_buttons_hidden(&self) -> bool {
        self.state == CellState::Centered
    }

    /// Whether a settle animation is in flight and [`tick`](Self::tick)
    /// needs to be driven.
    pub fn is_animating(&self) -> bool {
        self.settle.is_running()
    }

    /// Whether a pointer is actively dragging the cell. Hosts use this to
    /// keep the surrounding list from scrolling vertically mid-swipe.
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    // =========================================================================
    // Programmatic transitions
    // =========================================================================

    /// Reveal the left utility buttons.
    ///
    /// With `animated` false the offset jumps and all callbacks fire before
    /// this returns; otherwise the settle runs through [`tick`](Self::tick).
    /// Showing a side with no buttons settles back to centered.
    pub fn show_left_utility_buttons(&mut self, animated: bool, now: Instant) {
        self.interrupt();
        self.transition_to(CellState::LeftRevealed, animated, now);
    }

    /// Reveal the right utility buttons.
    pub fn show_right_utility_buttons(&mut self, animated: bool, now: Instant) {
        self.interrupt();
        self.transition_to(CellState::RightRevealed, animated, now);
    }

    /// Return the cell to centered, hiding any revealed buttons.
    pub fn hide_utility_buttons(&mut self, animated: bool, now: Instant) {
        self.interrupt();
        self.transition_to(CellState::Centered, animated, now);
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Feed one pointer event.
    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        match event.phase {
            PointerPhase::Pressed => self.pointer_pressed(event.position, event.timestamp),
            PointerPhase::Moved => self.pointer_moved(event.position, event.timestamp),
            PointerPhase::Released => self.pointer_released(event.position, event.timestamp),
            PointerPhase::Cancelled => self.pointer_cancelled(event.timestamp),
        }
    }

    fn pointer_pressed(&mut self, position: Point, now: Instant) {
        if self.tracker.is_active() {
            // Single-pointer widget: the first finger keeps the gesture.
            return;
        }
        if self.settle.is_running() {
            // New touches re-anchor a settling cell at the live offset
            // rather than queueing behind the animation.
            self.settle.stop();
            self.pending_state = None;
            tracing::trace!(
                target: "swipe_cell::cell",
                offset = self.offset,
                "touch preempted settle animation"
            );
        }
        self.tracker.press(position, self.offset, now);
    }

    fn pointer_moved(&mut self, position: Point, now: Instant) {
        if let Some(raw) = self.tracker.drag(position, now) {
            self.apply_offset(self.clamp_offset(raw));
        }
    }

    fn pointer_released(&mut self, position: Point, now: Instant) {
        match self.tracker.release(position, now) {
            Some(DragOutcome::Tap { position }) => self.resolve_tap(position, now),
            Some(DragOutcome::Drag { velocity }) => {
                let target = self.vetoed(self.release_target(velocity));
                self.transition_to(target, true, now);
            }
            None => {}
        }
    }

    /// An aborted gesture settles by position alone, as a zero-velocity
    /// release.
    fn pointer_cancelled(&mut self, now: Instant) {
        if self.tracker.cancel() {
            let target = self.vetoed(self.release_target(0.0));
            self.transition_to(target, true, now);
        }
    }

    // =========================================================================
    // Animation pump
    // =========================================================================

    /// Advance a running settle to `now`.
    ///
    /// Returns `true` while the animation still needs frames. Completion
    /// commits the pending state and fires
    /// [`did_end_scrolling`](SwipeCellDelegate::did_end_scrolling).
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.settle.is_running() {
            return false;
        }

        let offset = self.settle.update(now);
        self.apply_offset(offset);

        if self.settle.is_running() {
            return true;
        }

        if let Some(state) = self.pending_state.take() {
            self.commit_state(state);
        }
        false
    }

    // =========================================================================
    // Painting support
    // =========================================================================

    /// Frame of the cell content at the current offset.
    pub fn content_frame(&self) -> Rect {
        Rect::new(self.offset, 0.0, self.size.width, self.size.height)
    }

    /// Frame of the left strip, pinned beneath the content at the left edge.
    pub fn left_strip_frame(&self) -> Rect {
        Rect::new(0.0, 0.0, self.left.width(), self.size.height)
    }

    /// Frame of the right strip, pinned beneath the content at the right
    /// edge.
    pub fn right_strip_frame(&self) -> Rect {
        Rect::new(
            self.size.width - self.right.width(),
            0.0,
            self.right.width(),
            self.size.height,
        )
    }

    /// Left button frames in cell coordinates.
    pub fn left_button_frames(&self) -> Vec<Rect> {
        self.left.button_frames(self.size.height)
    }

    /// Right button frames in cell coordinates.
    pub fn right_button_frames(&self) -> Vec<Rect> {
        let strip_left = self.right_strip_frame().left();
        self.right
            .button_frames(self.size.height)
            .into_iter()
            .map(|frame| frame.offset(strip_left, 0.0))
            .collect()
    }

    // =========================================================================
    // Reuse
    // =========================================================================

    /// Reset for cell recycling: centered, no animation, no active gesture.
    /// Configured strips are kept. Fires no delegate callbacks.
    pub fn prepare_for_reuse(&mut self) {
        self.tracker.cancel();
        self.settle.stop();
        self.pending_state = None;
        self.offset = 0.0;
        self.state = CellState::Centered;
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(-self.right.width(), self.left.width())
    }

    fn resting_offset(&self, state: CellState) -> f32 {
        match state {
            CellState::Centered => 0.0,
            CellState::LeftRevealed => self.left.width(),
            CellState::RightRevealed => -self.right.width(),
        }
    }

    /// Decide the release target from offset and velocity.
    fn release_target(&self, velocity: f32) -> CellState {
        let left_width = self.left.width();
        let right_width = self.right.width();

        if velocity.abs() >= self.config.flick_velocity {
            // Direction of travel wins: a rightward flick either closes a
            // revealed right strip or opens the left one.
            return if velocity > 0.0 {
                if self.offset < 0.0 || left_width == 0.0 {
                    CellState::Centered
                } else {
                    CellState::LeftRevealed
                }
            } else if self.offset > 0.0 || right_width == 0.0 {
                CellState::Centered
            } else {
                CellState::RightRevealed
            };
        }

        if left_width > 0.0 && self.offset >= self.config.reveal_fraction * left_width {
            CellState::LeftRevealed
        } else if right_width > 0.0 && -self.offset >= self.config.reveal_fraction * right_width {
            CellState::RightRevealed
        } else {
            CellState::Centered
        }
    }

    /// Apply the delegate's swipe veto: a rejected reveal settles centered.
    fn vetoed(&self, target: CellState) -> CellState {
        if target == CellState::Centered {
            return target;
        }
        if self.dispatch_query(true, |d| d.can_swipe_to_state(target)) {
            target
        } else {
            tracing::debug!(target: "swipe_cell::cell", state = ?target, "delegate vetoed swipe");
            CellState::Centered
        }
    }

    /// Begin a transition. Fires `scrolling_to_state` immediately; commits
    /// synchronously for jumps and no-distance transitions, otherwise hands
    /// off to the settle animation.
    fn transition_to(&mut self, target: CellState, animated: bool, now: Instant) {
        let target = match target {
            CellState::LeftRevealed if self.left.is_empty() => CellState::Centered,
            CellState::RightRevealed if self.right.is_empty() => CellState::Centered,
            other => other,
        };

        tracing::trace!(
            target: "swipe_cell::cell",
            state = ?target,
            animated,
            "beginning transition"
        );
        self.dispatch(|d| d.scrolling_to_state(target));

        let target_offset = self.resting_offset(target);
        if !animated {
            self.apply_offset(target_offset);
            self.commit_state(target);
        } else if self.settle.start(self.offset, target_offset, now) {
            self.pending_state = Some(target);
        } else {
            self.commit_state(target);
        }
    }

    fn commit_state(&mut self, state: CellState) {
        self.state = state;
        tracing::debug!(target: "swipe_cell::cell", state = ?state, "cell settled");
        self.dispatch(|d| d.did_end_scrolling());
    }

    fn apply_offset(&mut self, offset: f32) {
        if self.offset != offset {
            self.offset = offset;
            self.dispatch(|d| d.did_scroll(offset));
        }
    }

    /// Resolve a tap while buttons are revealed. Taps on a button trigger
    /// it (and auto-hide per delegate policy); taps on the content close
    /// the strip; anything else is dropped.
    fn resolve_tap(&mut self, position: Point, now: Instant) {
        let (frame, left_side) = match self.state {
            CellState::Centered => return, // cell selection is the host's concern
            CellState::LeftRevealed => (self.left_strip_frame(), true),
            CellState::RightRevealed => (self.right_strip_frame(), false),
        };

        if !frame.contains(position) {
            self.hide_utility_buttons(true, now);
            return;
        }

        let strip = if left_side { &self.left } else { &self.right };
        let Some(index) = strip.button_index_at(position.x - frame.left()) else {
            return;
        };

        tracing::debug!(
            target: "swipe_cell::cell",
            index,
            side = if left_side { "left" } else { "right" },
            "utility button triggered"
        );
        if left_side {
            self.dispatch(|d| d.did_trigger_left_utility_button(index));
        } else {
            self.dispatch(|d| d.did_trigger_right_utility_button(index));
        }

        if self.dispatch_query(true, |d| d.should_hide_utility_buttons_on_swipe()) {
            self.hide_utility_buttons(true, now);
        }
    }

    /// Stop any in-flight gesture or settle before a programmatic
    /// transition takes over.
    fn interrupt(&mut self) {
        self.tracker.cancel();
        self.settle.stop();
        self.pending_state = None;
    }

    /// Replacing a strip re-anchors the offset: the committed state keeps
    /// holding unless its strip emptied, and any in-flight motion is
    /// dropped.
    fn reanchor_after_strip_change(&mut self) {
        self.interrupt();

        if self.state == CellState::LeftRevealed && self.left.is_empty() {
            self.state = CellState::Centered;
        }
        if self.state == CellState::RightRevealed && self.right.is_empty() {
            self.state = CellState::Centered;
        }
        self.offset = self.resting_offset(self.state);
    }

    fn dispatch(&self, f: impl FnOnce(&mut dyn SwipeCellDelegate)) {
        if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
            f(&mut *delegate.borrow_mut());
        }
    }

    fn dispatch_query<R>(&self, default: R, f: impl FnOnce(&mut dyn SwipeCellDelegate) -> R) -> R {
        match self.delegate.as_ref().and_then(Weak::upgrade) {
            Some(delegate) => f(&mut *delegate.borrow_mut()),
            None => default,
        }
    }
}

impl Default for SwipeableCell {
    fn default() -> Self {
        Self::new()
    }
}
