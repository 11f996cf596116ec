//! engine::command
//!
//! Parsing a single instruction line into an [`Operation`].
//!
//! # Grammar
//!
//! ```text
//! command := ("turn on" | "turn off" | "toggle") " " rect
//! rect    := INT "," INT " through " INT "," INT
//! INT     := [0-9]+
//! ```
//!
//! The four integers map to `(top, left, bottom, right)` in order.
//!
//! # Invariants
//!
//! - Parsing is pure: it never touches a [`Grid`]
//! - Keywords are tried in the fixed order turn on, turn off, toggle. A
//!   keyword whose rectangle fails to parse falls through to the next one.
//! - Bounds are not checked here; the grid checks them before writing
//!
//! # Example
//!
//! ```
//! use lightgrid::core::types::Rect;
//! use lightgrid::engine::command::{parse_line, OpKind};
//!
//! let op = parse_line("toggle 0,0 through 999,0").unwrap();
//! assert_eq!(op.kind, OpKind::Toggle);
//! assert_eq!(op.rect, Rect::new(0, 0, 999, 0));
//!
//! assert!(parse_line("nonsense command").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::core::types::{Rect, TypeError};
use crate::grid::{Grid, Transform};

/// Separator between the two corners of a rectangle.
const THROUGH: &str = " through ";

/// Errors from parsing or applying an instruction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unrecognized command: '{0}'")]
    UnrecognizedCommand(String),

    #[error("out-of-range rectangle: {0}")]
    OutOfRangeRectangle(#[from] TypeError),
}

/// The kind of range operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    TurnOn,
    TurnOff,
    Toggle,
}

impl OpKind {
    /// All kinds, in the order the parser tries them.
    pub const ALL: [OpKind; 3] = [OpKind::TurnOn, OpKind::TurnOff, OpKind::Toggle];

    /// The leading keyword of this kind's instruction.
    pub fn keyword(self) -> &'static str {
        match self {
            OpKind::TurnOn => "turn on",
            OpKind::TurnOff => "turn off",
            OpKind::Toggle => "toggle",
        }
    }

    /// The per-cell update rule for this kind.
    pub fn transform(self) -> Transform {
        match self {
            OpKind::TurnOn => Transform::TURN_ON,
            OpKind::TurnOff => Transform::TURN_OFF,
            OpKind::Toggle => Transform::TOGGLE,
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One parsed instruction: what to do, and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Operation {
    pub kind: OpKind,
    pub rect: Rect,
}

impl Operation {
    /// Create an operation.
    pub fn new(kind: OpKind, rect: Rect) -> Self {
        Self { kind, rect }
    }

    /// Apply this operation to `grid`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::OutOfRangeRectangle` if the rectangle does not
    /// fit the grid. The grid is unchanged in that case.
    pub fn apply_to(&self, grid: &mut Grid) -> Result<(), CommandError> {
        grid.transform(self.rect, self.kind.transform())?;
        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.rect)
    }
}

impl FromStr for Operation {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

/// Parse one instruction line.
///
/// # Errors
///
/// Returns `CommandError::UnrecognizedCommand` if no keyword is followed by
/// a well-formed rectangle.
pub fn parse_line(line: &str) -> Result<Operation, CommandError> {
    OpKind::ALL
        .into_iter()
        .find_map(|kind| {
            let rest = line.strip_prefix(kind.keyword())?.strip_prefix(' ')?;
            parse_rect(rest).map(|rect| Operation::new(kind, rect))
        })
        .ok_or_else(|| CommandError::UnrecognizedCommand(line.to_string()))
}

/// Parse `INT,INT through INT,INT`. The whole input must match.
fn parse_rect(input: &str) -> Option<Rect> {
    let (first, second) = input.split_once(THROUGH)?;
    let (top, left) = parse_pair(first)?;
    let (bottom, right) = parse_pair(second)?;
    Some(Rect::new(top, left, bottom, right))
}

fn parse_pair(input: &str) -> Option<(usize, usize)> {
    let (a, b) = input.split_once(',')?;
    Some((parse_int(a)?, parse_int(b)?))
}

/// Digits only: no sign, no whitespace. Values that overflow are rejected.
fn parse_int(input: &str) -> Option<usize> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}
