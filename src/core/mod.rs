//! core
//!
//! Core domain types and configuration for lightgrid.
//!
//! # Modules
//!
//! - [`types`] - Strong types: LightState, Rect
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing keeps cell states two-valued
//! - Schemas are strict and self-describing

pub mod config;
pub mod types;
