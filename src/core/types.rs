//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`LightState`] - Two-valued state of a single light
//! - [`Rect`] - Inclusive axis-aligned rectangle of lights
//!
//! # Validation
//!
//! A [`Rect`] is plain data until it is checked against a grid size with
//! [`Rect::validate`]. The grid refuses to touch any cell until that check
//! has passed, so a bad rectangle never leaves a half-applied update behind.
//!
//! # Examples
//!
//! ```
//! use lightgrid::core::types::Rect;
//!
//! let rect = Rect::new(0, 0, 2, 2);
//! assert_eq!(rect.area(), Some(9));
//! assert!(rect.validate(3).is_ok());
//!
//! // Inverted corners and out-of-bounds coordinates are rejected
//! assert!(Rect::new(2, 0, 1, 0).validate(3).is_err());
//! assert!(Rect::new(0, 0, 3, 3).validate(3).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid rectangle {rect}: {reason}")]
    InvalidRect { rect: Rect, reason: String },

    #[error("rectangle {rect} is outside a {size}x{size} grid")]
    OutOfRange { rect: Rect, size: usize },
}

/// State of a single light.
///
/// The discriminants are the numeric values used by the grid's affine
/// update rule, so `state as i8` is always 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum LightState {
    #[default]
    Off = 0,
    On = 1,
}

impl LightState {
    /// Clamp an arbitrary integer into the two-valued range.
    pub fn clamp_from(value: i16) -> Self {
        if value >= LightState::On as i16 {
            LightState::On
        } else {
            LightState::Off
        }
    }

    /// Check whether the light is lit.
    pub fn is_on(self) -> bool {
        self == LightState::On
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightState::Off => write!(f, "off"),
            LightState::On => write!(f, "on"),
        }
    }
}

/// An inclusive rectangle of lights.
///
/// `top..=bottom` selects rows and `left..=right` selects columns, so
/// `Rect::new(0, 0, 2, 2)` covers a 3x3 block of nine lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl Rect {
    /// Create a rectangle from its corners. No validation is performed.
    pub fn new(top: usize, left: usize, bottom: usize, right: usize) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Check the rectangle against a grid of side `size`.
    ///
    /// # Errors
    ///
    /// - `TypeError::InvalidRect` if `top > bottom` or `left > right`
    /// - `TypeError::OutOfRange` if any coordinate is `>= size`
    pub fn validate(&self, size: usize) -> Result<(), TypeError> {
        if self.top > self.bottom {
            return Err(TypeError::InvalidRect {
                rect: *self,
                reason: "top is past bottom".into(),
            });
        }
        if self.left > self.right {
            return Err(TypeError::InvalidRect {
                rect: *self,
                reason: "left is past right".into(),
            });
        }
        if self.bottom >= size || self.right >= size {
            return Err(TypeError::OutOfRange { rect: *self, size });
        }
        Ok(())
    }

    /// Number of rows covered, saturating at `usize::MAX`.
    pub fn height(&self) -> usize {
        self.bottom.saturating_sub(self.top).saturating_add(1)
    }

    /// Number of columns covered, saturating at `usize::MAX`.
    pub fn width(&self) -> usize {
        self.right.saturating_sub(self.left).saturating_add(1)
    }

    /// Number of cells covered, or `None` if it does not fit in a `usize`.
    pub fn area(&self) -> Option<usize> {
        self.height().checked_mul(self.width())
    }

    /// Check whether two rectangles share no cell.
    pub fn is_disjoint(&self, other: &Rect) -> bool {
        self.bottom < other.top
            || other.bottom < self.top
            || self.right < other.left
            || other.right < self.left
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{} through {},{}",
            self.top, self.left, self.bottom, self.right
        )
    }
}
