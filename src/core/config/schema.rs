//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Values are validated after parsing. Unknown keys are rejected so that a
//! typo does not silently fall back to a default.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Largest grid side accepted from configuration or flags.
pub const MAX_GRID_SIZE: usize = 16_384;

/// Contents of a config file.
///
/// # Example
///
/// ```toml
/// [grid]
/// size = 1000
///
/// [output]
/// json = false
/// debug = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Grid settings
    pub grid: Option<GridConfig>,

    /// Output settings
    pub output: Option<OutputConfig>,
}

impl ConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(size) = self.grid.as_ref().and_then(|g| g.size) {
            validate_size(size)?;
        }
        Ok(())
    }
}

/// Grid settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Side length of the square grid
    pub size: Option<usize>,
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Print a JSON summary instead of the bare count
    pub json: Option<bool>,

    /// Emit debug diagnostics on stderr
    pub debug: Option<bool>,
}

/// Check that `size` is a usable grid side.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if `size` is zero or larger than
/// [`MAX_GRID_SIZE`].
pub fn validate_size(size: usize) -> Result<(), ConfigError> {
    if size == 0 {
        return Err(ConfigError::InvalidValue(
            "grid size must be at least 1".to_string(),
        ));
    }
    if size > MAX_GRID_SIZE {
        return Err(ConfigError::InvalidValue(format!(
            "grid size {} exceeds maximum of {}",
            size, MAX_GRID_SIZE
        )));
    }
    Ok(())
}
