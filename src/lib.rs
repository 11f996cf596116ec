//! lightgrid - a grid of lights driven by rectangular instructions
//!
//! A square grid of lights starts with every light off. Instructions of the
//! form `turn on`, `turn off` or `toggle`, each followed by an inclusive
//! rectangle, are applied in order, and the number of lit lights is reported
//! at the end.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Parses instruction lines and applies them in order
//! - [`grid`] - The light grid and its range operations
//! - [`core`] - Domain types and configuration
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! 1. Every light is always exactly on or off
//! 2. Range updates cost time proportional to the rectangle, not the grid
//! 3. An invalid instruction aborts the run before it changes any light
//!
//! # Example
//!
//! ```
//! use lightgrid::engine::run_lines;
//!
//! let summary = run_lines(1000, [
//!     "turn on 0,0 through 999,999",
//!     "toggle 0,0 through 999,0",
//! ])
//! .unwrap();
//! assert_eq!(summary.lit, 999_000);
//! ```

pub mod cli;
pub mod core;
pub mod engine;
pub mod grid;
pub mod ui;
