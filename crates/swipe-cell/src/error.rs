//! Error types for the swipe cell.

use thiserror::Error;

/// Errors surfaced by the public cell API.
///
/// Almost everything in this widget fails soft (out-of-range taps are
/// dropped, a vetoed swipe settles back to centered, a dead delegate is a
/// no-op). The exceptions below are programming errors that would corrupt
/// layout if accepted silently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwipeCellError {
    /// A button strip was configured with a width that cannot be laid out.
    #[error("utility button width must be positive and finite, got {width}")]
    InvalidButtonWidth { width: f32 },
}
