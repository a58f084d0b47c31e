//! Swipe Cell: a swipeable list-row widget.
//!
//! Swiping a cell horizontally reveals a strip of utility action buttons on
//! either side (delete, archive, ...); releasing the drag either snaps to
//! the revealed state or springs back to centered. The crate owns the
//! gesture state machine, offset tracking, settle animation, button-strip
//! layout and tap resolution, and the delegate protocol. It is
//! toolkit-agnostic: the host translates its native input into
//! [`PointerEvent`]s, drives [`SwipeableCell::tick`] while an animation is
//! in flight, and paints the frames the cell computes.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::Instant;
//!
//! use swipe_cell::{Color, Size, SwipeCellDelegate, SwipeableCell, UtilityButton};
//!
//! struct Actions;
//!
//! impl SwipeCellDelegate for Actions {
//!     fn did_trigger_right_utility_button(&mut self, index: usize) {
//!         println!("right action {index} triggered");
//!     }
//! }
//!
//! let mut cell = SwipeableCell::new();
//! cell.set_size(Size::new(320.0, 44.0));
//! cell.set_right_utility_buttons(
//!     vec![
//!         UtilityButton::new("Archive", Color::GRAY),
//!         UtilityButton::new("Delete", Color::RED),
//!     ],
//!     80.0,
//! )?;
//!
//! let delegate: Rc<RefCell<dyn SwipeCellDelegate>> = Rc::new(RefCell::new(Actions));
//! cell.set_delegate(&delegate);
//!
//! cell.show_right_utility_buttons(false, Instant::now());
//! assert!(!cell.is_utility_buttons_hidden());
//! # Ok::<(), swipe_cell::SwipeCellError>(())
//! ```
//!
//! # Threading
//!
//! Everything is single-threaded and event-driven: pointer handling, ticks,
//! and delegate dispatch all run on the host's UI thread. The delegate is
//! held through `Rc`/`Weak`, so the cell is deliberately not `Send`.

pub mod animation;
pub mod button;
pub mod cell;
pub mod delegate;
pub mod error;
pub mod events;
mod scroller;
pub mod types;

pub use animation::Easing;
pub use button::{ButtonStrip, UtilityButton};
pub use cell::{
    CellState, DEFAULT_DRAG_SLOP, DEFAULT_FLICK_VELOCITY, DEFAULT_REVEAL_FRACTION,
    DEFAULT_SETTLE_DURATION_MS, SwipeConfig, SwipeableCell,
};
pub use delegate::SwipeCellDelegate;
pub use error::SwipeCellError;
pub use events::{PointerEvent, PointerPhase};
pub use types::{Color, Point, Rect, Size};
