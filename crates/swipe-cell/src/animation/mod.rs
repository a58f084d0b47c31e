//! Offset animation: easing curves and the settle controller.
//!
//! When a drag ends (or a programmatic show/hide asks for an animated
//! transition), the cell's offset eases from its current value to the target
//! resting position. [`SettleAnimation`] owns that interpolation;
//! [`Easing`] selects the curve.

mod easing;
mod settle;

pub use easing::{Easing, ease, lerp_eased};
pub use settle::SettleAnimation;
