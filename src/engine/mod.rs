//! engine
//!
//! Turns instruction text into grid mutations.
//!
//! # Architecture
//!
//! - [`command`] recognizes a line and produces an [`Operation`]. It has no
//!   side effects.
//! - [`runner`] owns the [`crate::grid::Grid`], applies operations in input
//!   order and reports the final lit count.
//!
//! Keeping recognition separate from application means the parser can be
//! tested without a grid and the grid never sees raw text.
//!
//! # Invariants
//!
//! - Operations are applied in the order they appear
//! - The first failure aborts the run; no line is skipped
//! - A failing operation leaves the grid unchanged

pub mod command;
pub mod runner;

pub use command::{parse_line, CommandError, OpKind, Operation};
pub use runner::{run_lines, RunError, RunSummary, Runner};
