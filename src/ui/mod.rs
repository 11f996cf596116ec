//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Result printing and stderr diagnostics
//!
//! # Design
//!
//! All printing goes through this module so that stdout stays reserved for
//! the result and verbosity is honored in one place.

pub mod output;
