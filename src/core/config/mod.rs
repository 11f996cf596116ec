//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$LIGHTS_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/lights/config.toml`
//! 3. `~/.lights/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use lightgrid::core::config::Config;
//!
//! let result = Config::load().unwrap();
//! println!("Grid size: {}", result.config.size());
//! ```

pub mod schema;

pub use schema::{validate_size, ConfigFile, GridConfig, OutputConfig, MAX_GRID_SIZE};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::grid::DEFAULT_SIZE;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "LIGHTS_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Where to look for a config file.
#[derive(Debug, Clone, Default)]
pub struct SearchPaths {
    /// Value of `$LIGHTS_CONFIG`
    pub explicit: Option<PathBuf>,
    /// Value of `$XDG_CONFIG_HOME`
    pub xdg_config_home: Option<PathBuf>,
    /// User home directory
    pub home: Option<PathBuf>,
}

impl SearchPaths {
    /// Read the search locations from the process environment.
    pub fn from_env() -> Self {
        Self {
            explicit: std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            xdg_config_home: std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            home: dirs::home_dir(),
        }
    }
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub file: ConfigFile,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. Missing config files are not an error.
    pub fn load() -> Result<ConfigLoadResult, ConfigError> {
        Self::load_from(&SearchPaths::from_env())
    }

    /// Load configuration from explicit search locations.
    pub fn load_from(paths: &SearchPaths) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        // 1. Check $LIGHTS_CONFIG
        if let Some(path) = &paths.explicit {
            if path.exists() {
                let config = Self::load_file(path)?;
                return Ok(ConfigLoadResult { config, warnings });
            }
            warnings.push(ConfigWarning {
                message: format!("{} points to a missing file, ignoring", CONFIG_ENV),
                path: path.clone(),
            });
        }

        // 2. Check $XDG_CONFIG_HOME/lights/config.toml
        // 3. Check ~/.lights/config.toml
        let candidates = [
            paths
                .xdg_config_home
                .as_ref()
                .map(|p| p.join("lights/config.toml")),
            paths.home.as_ref().map(|p| p.join(".lights/config.toml")),
        ];
        for path in candidates.into_iter().flatten() {
            if path.exists() {
                let config = Self::load_file(&path)?;
                return Ok(ConfigLoadResult { config, warnings });
            }
        }

        // No config found, use defaults
        Ok(ConfigLoadResult {
            config: Config::default(),
            warnings,
        })
    }

    /// Build a config from already-parsed contents.
    pub fn from_file(file: ConfigFile) -> Self {
        Self { file, path: None }
    }

    /// Read, parse and validate a single config file.
    pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Config {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the grid side length.
    ///
    /// Defaults to 1000 if not configured.
    pub fn size(&self) -> usize {
        self.file
            .grid
            .as_ref()
            .and_then(|g| g.size)
            .unwrap_or(DEFAULT_SIZE)
    }

    /// Check if JSON output is enabled.
    ///
    /// Defaults to `false` if not configured.
    pub fn json(&self) -> bool {
        self.file
            .output
            .as_ref()
            .and_then(|o| o.json)
            .unwrap_or(false)
    }

    /// Check if debug diagnostics are enabled.
    ///
    /// Defaults to `false` if not configured.
    pub fn debug(&self) -> bool {
        self.file
            .output
            .as_ref()
            .and_then(|o| o.debug)
            .unwrap_or(false)
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
