//! Delegate protocol for cell callbacks.
//!
//! Every method has a default body, so a delegate implements only the
//! callbacks it cares about; an unimplemented hook means "use the default
//! policy" (all swipes allowed, buttons auto-hide after a tap). The cell
//! holds the delegate through a [`Weak`](std::rc::Weak) reference: the list
//! controller that installs the delegate owns its lifetime, and once it is
//! dropped every dispatch from the cell silently becomes a no-op.

use crate::cell::CellState;

/// Receives notifications from a [`SwipeableCell`](crate::SwipeableCell).
pub trait SwipeCellDelegate {
    /// A revealed left-strip button at `index` was tapped.
    fn did_trigger_left_utility_button(&mut self, index: usize) {
        let _ = index;
    }

    /// A revealed right-strip button at `index` was tapped.
    fn did_trigger_right_utility_button(&mut self, index: usize) {
        let _ = index;
    }

    /// The cell committed to settling toward `state`. Fires once per
    /// transition, when the settle (or instantaneous jump) begins.
    fn scrolling_to_state(&mut self, state: CellState) {
        let _ = state;
    }

    /// Whether a triggered button should close the strip afterwards.
    fn should_hide_utility_buttons_on_swipe(&mut self) -> bool {
        true
    }

    /// Veto hook: returning `false` forces a gesture that would settle at
    /// `state` back to [`CellState::Centered`] instead. Never asked for
    /// `Centered` itself.
    fn can_swipe_to_state(&mut self, state: CellState) -> bool {
        let _ = state;
        true
    }

    /// A transition finished and the cell is at rest.
    fn did_end_scrolling(&mut self) {}

    /// The cell's horizontal offset changed (during drags and settles).
    fn did_scroll(&mut self, offset: f32) {
        let _ = offset;
    }
}
