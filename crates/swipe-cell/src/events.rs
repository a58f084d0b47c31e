//! Pointer event types consumed by the cell.
//!
//! The cell does not depend on any particular windowing toolkit. The host
//! translates its native touch/mouse events into [`PointerEvent`] values and
//! feeds them to [`SwipeableCell::handle_pointer`](crate::SwipeableCell::handle_pointer).
//! Every event carries the timestamp at which it occurred; the cell never
//! reads a clock of its own, which keeps gesture classification and animation
//! deterministic under test.

use std::time::Instant;

use crate::types::Point;

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer made contact (touch down / primary button press).
    Pressed,
    /// The pointer moved while in contact.
    Moved,
    /// The pointer lifted normally.
    Released,
    /// The interaction was aborted by the system (e.g. the host list view
    /// claimed the touch for vertical scrolling).
    Cancelled,
}

/// A single pointer event in cell-local coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    /// Phase of the interaction.
    pub phase: PointerPhase,
    /// Position relative to the cell's top-left corner.
    pub position: Point,
    /// When the event occurred.
    pub timestamp: Instant,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(phase: PointerPhase, position: Point, timestamp: Instant) -> Self {
        Self {
            phase,
            position,
            timestamp,
        }
    }

    /// Create a press event.
    pub fn pressed(position: Point, timestamp: Instant) -> Self {
        Self::new(PointerPhase::Pressed, position, timestamp)
    }

    /// Create a move event.
    pub fn moved(position: Point, timestamp: Instant) -> Self {
        Self::new(PointerPhase::Moved, position, timestamp)
    }

    /// Create a release event.
    pub fn released(position: Point, timestamp: Instant) -> Self {
        Self::new(PointerPhase::Released, position, timestamp)
    }

    /// Create a cancellation event.
    pub fn cancelled(position: Point, timestamp: Instant) -> Self {
        Self::new(PointerPhase::Cancelled, position, timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_constructors() {
        let now = Instant::now();
        let p = Point::new(4.0, 8.0);

        assert_eq!(PointerEvent::pressed(p, now).phase, PointerPhase::Pressed);
        assert_eq!(PointerEvent::moved(p, now).phase, PointerPhase::Moved);
        assert_eq!(PointerEvent::released(p, now).phase, PointerPhase::Released);
        assert_eq!(
            PointerEvent::cancelled(p, now).phase,
            PointerPhase::Cancelled
        );
        assert_eq!(PointerEvent::pressed(p, now).position, p);
    }
}
