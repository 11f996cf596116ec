//! engine::runner
//!
//! Drives a [`Grid`] through a stream of instruction lines.
//!
//! # Lifecycle
//!
//! ```text
//! for each line: Parse -> Apply
//! then:          Count
//! ```
//!
//! Lines are applied strictly in input order. The first line that fails to
//! parse or does not fit the grid aborts the run; there is no skip mode and
//! no partial count is reported. Blank or padded lines are not instructions
//! and fail like any other garbage. Only a trailing `\r` from CRLF input is
//! stripped.

use std::io::{self, BufRead};

use serde::Serialize;
use thiserror::Error;

use super::command::{parse_line, CommandError, Operation};
use crate::grid::Grid;
use crate::ui::output::{self, Verbosity};

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("line {line}: {error}")]
    Command {
        /// 1-based line number in the input.
        line: usize,
        error: CommandError,
    },

    #[error("failed to read input")]
    Read(#[from] io::Error),
}

/// Result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Side length of the grid.
    pub size: usize,
    /// Number of operations applied.
    pub commands: usize,
    /// Lights on after the last operation.
    pub lit: usize,
}

/// Applies instructions to a grid it owns.
#[derive(Debug)]
pub struct Runner {
    grid: Grid,
    applied: usize,
    verbosity: Verbosity,
}

impl Runner {
    /// Create a runner over a fresh, dark `size` x `size` grid.
    pub fn new(size: usize, verbosity: Verbosity) -> Self {
        Self::with_grid(Grid::new(size), verbosity)
    }

    /// Create a runner over an existing grid.
    pub fn with_grid(grid: Grid, verbosity: Verbosity) -> Self {
        Self {
            grid,
            applied: 0,
            verbosity,
        }
    }

    /// The grid in its current state.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Parse and apply one line.
    ///
    /// # Errors
    ///
    /// Returns `RunError::Command` tagged with `line_no` if the line is not a
    /// valid instruction or its rectangle does not fit the grid.
    pub fn apply_line(
        &mut self,
        line_no: usize,
        line: &str,
    ) -> Result<Operation, RunError> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        let op = parse_line(line).map_err(|error| RunError::Command {
            line: line_no,
            error,
        })?;
        op.apply_to(&mut self.grid).map_err(|error| RunError::Command {
            line: line_no,
            error,
        })?;
        self.applied += 1;

        output::debug(
            format!("line {}: {} ({} lit)", line_no, op, self.grid.count_lit()),
            self.verbosity,
        );
        Ok(op)
    }

    /// Apply every line of `reader` in order, then report the count.
    ///
    /// # Errors
    ///
    /// Stops at the first failing line; see [`Runner::apply_line`].
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<RunSummary, RunError> {
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            self.apply_line(idx + 1, &line)?;
        }

        let summary = self.summary();
        output::debug(
            format!(
                "applied {} commands to {}x{} grid, {} lit",
                summary.commands, summary.size, summary.size, summary.lit
            ),
            self.verbosity,
        );
        Ok(summary)
    }

    /// Snapshot of the run so far.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            size: self.grid.size(),
            commands: self.applied,
            lit: self.grid.count_lit(),
        }
    }
}

/// Run `lines` against a fresh `size` x `size` grid.
pub fn run_lines<I, S>(size: usize, lines: I) -> Result<RunSummary, RunError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut runner = Runner::new(size, Verbosity::Quiet);
    for (idx, line) in lines.into_iter().enumerate() {
        runner.apply_line(idx + 1, line.as_ref())?;
    }
    Ok(runner.summary())
}
