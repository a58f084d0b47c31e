//! Utility buttons and the strips that lay them out.
//!
//! Buttons are plain value objects constructed by the host (title plus
//! colors); the cell only lays them out and resolves taps to indices. A
//! strip owns an ordered button sequence with one uniform width, replaced
//! atomically through the cell's setter API.

use crate::error::SwipeCellError;
use crate::types::{Color, Rect};

/// One action button revealed by swiping the cell.
///
/// The widget does not paint; the host reads the title and colors when
/// rendering the frames returned by the cell's layout queries.
#[derive(Debug, Clone, PartialEq)]
pub struct UtilityButton {
    /// Label shown on the button.
    title: String,
    /// Fill color behind the label.
    background: Color,
    /// Label color.
    text_color: Color,
}

impl UtilityButton {
    /// Create a button with the given title and background color.
    pub fn new(title: impl Into<String>, background: Color) -> Self {
        Self {
            title: title.into(),
            background,
            text_color: Color::WHITE,
        }
    }

    /// Set the label color (builder pattern).
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Get the button's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Get the label color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }
}

/// An ordered row of utility buttons on one side of the cell.
///
/// Button `i` occupies `[i * button_width, (i + 1) * button_width)` in
/// strip-local coordinates; the strip's total width is
/// `len() * button_width`.
#[derive(Debug, Clone, Default)]
pub struct ButtonStrip {
    buttons: Vec<UtilityButton>,
    button_width: f32,
}

impl ButtonStrip {
    /// Create a strip. The width must be positive and finite even for an
    /// empty sequence; rejecting it here keeps a later non-empty
    /// replacement from inheriting a corrupt layout.
    pub fn new(buttons: Vec<UtilityButton>, button_width: f32) -> Result<Self, SwipeCellError> {
        if !(button_width.is_finite() && button_width > 0.0) {
            return Err(SwipeCellError::InvalidButtonWidth {
                width: button_width,
            });
        }

        Ok(Self {
            buttons,
            button_width,
        })
    }

    /// A strip with no buttons and zero width.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of buttons.
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Whether the strip has no buttons.
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// The buttons, in layout order.
    pub fn buttons(&self) -> &[UtilityButton] {
        &self.buttons
    }

    /// Uniform per-button width.
    pub fn button_width(&self) -> f32 {
        self.button_width
    }

    /// Total strip width: `len() * button_width`.
    pub fn width(&self) -> f32 {
        self.buttons.len() as f32 * self.button_width
    }

    /// Map a strip-local x coordinate to a button index.
    ///
    /// Returns `None` for coordinates outside the laid-out buttons.
    pub fn button_index_at(&self, local_x: f32) -> Option<usize> {
        if self.buttons.is_empty() || local_x < 0.0 || local_x >= self.width() {
            return None;
        }

        let index = (local_x / self.button_width) as usize;
        (index < self.buttons.len()).then_some(index)
    }

    /// Frames of all buttons in strip-local coordinates.
    pub fn button_frames(&self, height: f32) -> Vec<Rect> {
        (0..self.buttons.len())
            .map(|i| Rect::new(i as f32 * self.button_width, 0.0, self.button_width, height))
            .collect()
    }
}
