//! grid
//!
//! The light grid: an NxN store of [`LightState`] cells with bulk range
//! updates and a lit-count query.
//!
//! # Design
//!
//! Cells live in one row-major buffer. A range update walks the rectangle
//! one row slice at a time, so its cost is proportional to the rectangle's
//! area and never to the grid's.
//!
//! All three mutating operations are the same affine rule applied per cell:
//!
//! ```text
//! new = clamp(old * mult + addend, OFF, ON)
//! ```
//!
//! | operation  | mult | addend |
//! |------------|------|--------|
//! | `turn_on`  |  0   |   1    |
//! | `turn_off` |  0   |   0    |
//! | `toggle`   | -1   |   1    |
//!
//! The lit count is updated by the same pass, so [`Grid::count_lit`] is O(1).
//!
//! # Invariants
//!
//! - Every cell is exactly `Off` or `On`
//! - `lit` always equals the number of `On` cells
//! - A rectangle is validated before any cell is written
//!
//! # Example
//!
//! ```
//! use lightgrid::core::types::Rect;
//! use lightgrid::grid::Grid;
//!
//! let mut grid = Grid::new(10);
//! grid.turn_on(Rect::new(0, 0, 9, 9)).unwrap();
//! grid.turn_off(Rect::new(4, 4, 5, 5)).unwrap();
//! assert_eq!(grid.count_lit(), 96);
//! ```

use crate::core::types::{LightState, Rect, TypeError};

/// Side length used when no size is configured.
pub const DEFAULT_SIZE: usize = 1000;

/// Per-cell affine update `clamp(old * mult + addend)`.
///
/// Only the three rules below exist; the fields are private so the grid can
/// never be driven by anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    mult: i8,
    addend: i8,
}

impl Transform {
    /// Set every cell on.
    pub const TURN_ON: Transform = Transform { mult: 0, addend: 1 };
    /// Set every cell off.
    pub const TURN_OFF: Transform = Transform { mult: 0, addend: 0 };
    /// Flip every cell (`1 - v`).
    pub const TOGGLE: Transform = Transform {
        mult: -1,
        addend: 1,
    };

    /// Apply the rule to a single state.
    pub fn apply(self, state: LightState) -> LightState {
        let value = i16::from(state as i8) * i16::from(self.mult) + i16::from(self.addend);
        LightState::clamp_from(value)
    }
}

/// A square grid of lights, all `Off` at construction.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<LightState>,
    lit: usize,
}

impl Grid {
    /// Create a `size` x `size` grid with every light off.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![LightState::Off; size * size],
            lit: 0,
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check whether the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// State of the light at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<LightState> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// Number of lights currently on.
    pub fn count_lit(&self) -> usize {
        self.lit
    }

    /// Turn every light in `rect` on.
    ///
    /// # Errors
    ///
    /// Returns a `TypeError` if `rect` does not fit the grid; nothing is
    /// modified in that case.
    pub fn turn_on(&mut self, rect: Rect) -> Result<(), TypeError> {
        self.transform(rect, Transform::TURN_ON)
    }

    /// Turn every light in `rect` off.
    ///
    /// # Errors
    ///
    /// Returns a `TypeError` if `rect` does not fit the grid; nothing is
    /// modified in that case.
    pub fn turn_off(&mut self, rect: Rect) -> Result<(), TypeError> {
        self.transform(rect, Transform::TURN_OFF)
    }

    /// Flip every light in `rect`.
    ///
    /// # Errors
    ///
    /// Returns a `TypeError` if `rect` does not fit the grid; nothing is
    /// modified in that case.
    pub fn toggle(&mut self, rect: Rect) -> Result<(), TypeError> {
        self.transform(rect, Transform::TOGGLE)
    }

    /// Apply `transform` to every cell of `rect`.
    pub(crate) fn transform(
        &mut self,
        rect: Rect,
        transform: Transform,
    ) -> Result<(), TypeError> {
        rect.validate(self.size)?;

        for row in rect.top..=rect.bottom {
            let start = row * self.size + rect.left;
            let end = row * self.size + rect.right + 1;
            for cell in &mut self.cells[start..end] {
                let next = transform.apply(*cell);
                match (cell.is_on(), next.is_on()) {
                    (false, true) => self.lit += 1,
                    (true, false) => self.lit -= 1,
                    _ => {}
                }
                *cell = next;
            }
        }
        Ok(())
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = LightState> + '_ {
        self.cells.iter().copied()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Grid {}
