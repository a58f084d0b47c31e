//! Drag/tap classification and release velocity tracking.
//!
//! A press anchors the tracker at the cell's live offset. Movement beyond a
//! small slop commits the gesture to dragging; once committed it can never
//! resolve as a tap again. A press/release pair that stays inside the slop
//! resolves as a tap at the release position. Release velocity is measured
//! over a short trailing window of positions so a flick registers even when
//! the finger slowed mid-drag.

use std::time::{Duration, Instant};

use crate::types::Point;

/// Only positions within this trailing window count toward release velocity.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// Below this sample spacing the velocity estimate is meaningless.
const MIN_VELOCITY_DT: f32 = 0.001;

/// How a finished pointer interaction resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DragOutcome {
    /// The pointer never left the slop radius.
    Tap {
        /// Release position in cell coordinates.
        position: Point,
    },
    /// The pointer dragged the cell.
    Drag {
        /// Horizontal release velocity in pixels per second. Positive is
        /// rightward.
        velocity: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackerState {
    /// No pointer in contact.
    Inactive,
    /// Pointer down, movement still inside the slop.
    Pressed,
    /// Movement exceeded the slop; the cell follows the pointer.
    Dragging,
}

/// Tracks one pointer interaction from press to release.
#[derive(Debug, Clone)]
pub(crate) struct DragTracker {
    state: TrackerState,
    /// Movement threshold separating taps from drags.
    slop: f32,
    /// Position of the initial press.
    press_pos: Point,
    /// Cell offset at the time of the press.
    anchor_offset: f32,
    /// Recent horizontal positions for velocity calculation.
    history: Vec<(f32, Instant)>,
}

impl DragTracker {
    pub(crate) fn new(slop: f32) -> Self {
        Self {
            state: TrackerState::Inactive,
            slop,
            press_pos: Point::ZERO,
            anchor_offset: 0.0,
            history: Vec::with_capacity(10),
        }
    }

    pub(crate) fn set_slop(&mut self, slop: f32) {
        self.slop = slop;
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.state == TrackerState::Dragging
    }

    pub(crate) fn is_active(&self) -> bool {
        self.state != TrackerState::Inactive
    }

    /// Start tracking a press, anchored at the cell's current offset.
    pub(crate) fn press(&mut self, position: Point, anchor_offset: f32, now: Instant) {
        self.state = TrackerState::Pressed;
        self.press_pos = position;
        self.anchor_offset = anchor_offset;
        self.history.clear();
        self.record_position(position.x, now);
    }

    /// Feed a move. Returns the unclamped offset the cell should follow
    /// while the gesture is a drag, `None` while it is still a potential tap.
    pub(crate) fn drag(&mut self, position: Point, now: Instant) -> Option<f32> {
        if self.state == TrackerState::Inactive {
            return None;
        }

        self.record_position(position.x, now);

        if self.state == TrackerState::Pressed {
            let dx = position.x - self.press_pos.x;
            let dy = position.y - self.press_pos.y;
            if (dx * dx + dy * dy).sqrt() > self.slop {
                self.state = TrackerState::Dragging;
                tracing::trace!(
                    target: "swipe_cell::gesture",
                    dx,
                    dy,
                    "movement exceeded slop, gesture is a drag"
                );
            }
        }

        if self.state == TrackerState::Dragging {
            Some(self.anchor_offset + (position.x - self.press_pos.x))
        } else {
            None
        }
    }

    /// Finish the interaction, classifying it as a tap or a drag.
    pub(crate) fn release(&mut self, position: Point, now: Instant) -> Option<DragOutcome> {
        let outcome = match self.state {
            TrackerState::Inactive => None,
            TrackerState::Pressed => Some(DragOutcome::Tap { position }),
            TrackerState::Dragging => {
                self.record_position(position.x, now);
                Some(DragOutcome::Drag {
                    velocity: self.release_velocity(),
                })
            }
        };

        self.reset();
        outcome
    }

    /// Abort the interaction without resolving it.
    pub(crate) fn cancel(&mut self) -> bool {
        let was_dragging = self.state == TrackerState::Dragging;
        self.reset();
        was_dragging
    }

    fn reset(&mut self) {
        self.state = TrackerState::Inactive;
        self.history.clear();
    }

    /// Record a horizontal position, discarding samples older than the
    /// velocity window.
    fn record_position(&mut self, x: f32, now: Instant) {
        let cutoff = now.checked_sub(VELOCITY_WINDOW);
        if let Some(cutoff) = cutoff {
            self.history.retain(|(_, t)| *t > cutoff);
        }
        self.history.push((x, now));
    }

    /// Horizontal velocity over the retained history, px/s.
    fn release_velocity(&self) -> f32 {
        if self.history.len() < 2 {
            return 0.0;
        }

        let (x1, t1) = self.history[0];
        let (x2, t2) = self.history[self.history.len() - 1];
        let dt = t2.saturating_duration_since(t1).as_secs_f32();
        if dt < MIN_VELOCITY_DT {
            return 0.0;
        }

        (x2 - x1) / dt
    }
}
