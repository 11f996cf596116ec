//! cli
//!
//! Command-line interface layer for lightgrid.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and merge them with config defaults
//! - Open the instruction stream
//! - Hand the stream to [`crate::engine::Runner`] and print the result
//!
//! # Architecture
//!
//! The CLI layer is thin. It never parses instructions or touches the grid
//! itself; all of that happens in [`crate::engine`].

pub mod args;

pub use args::Cli;

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};

use crate::core::config::{validate_size, Config};
use crate::engine::{RunSummary, Runner};
use crate::ui::output::{self, Verbosity};

/// Effective settings after applying CLI flags over config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub size: usize,
    pub json: bool,
    pub verbosity: Verbosity,
}

impl Settings {
    /// Resolve settings. CLI flags take precedence over config values.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting grid size is out of bounds.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let size = cli.size.unwrap_or_else(|| config.size());
        validate_size(size).context("invalid --size")?;

        Ok(Self {
            size,
            json: cli.json || config.json(),
            verbosity: Verbosity::from_flags(cli.quiet, cli.debug || config.debug()),
        })
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    execute(&cli)
}

/// Execute an already-parsed command line.
pub fn execute(cli: &Cli) -> Result<()> {
    let (config, warnings) = if cli.no_config {
        (Config::default(), Vec::new())
    } else {
        let loaded = Config::load().context("failed to load configuration")?;
        (loaded.config, loaded.warnings)
    };

    let settings = Settings::resolve(cli, &config)?;
    for warning in &warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            settings.verbosity,
        );
    }
    if let Some(path) = config.loaded_from() {
        output::debug(
            format!("loaded config from {}", path.display()),
            settings.verbosity,
        );
    }

    let summary = process(cli, &settings)?;
    if settings.json {
        output::json(&summary).context("failed to encode summary")?;
    } else {
        output::result(summary.lit);
    }
    Ok(())
}

/// Apply the instruction stream named by `cli.input` to a fresh grid.
fn process(cli: &Cli, settings: &Settings) -> Result<RunSummary> {
    let mut runner = Runner::new(settings.size, settings.verbosity);

    let summary = if cli.reads_stdin() {
        runner.run(io::stdin().lock())
    } else {
        let file = File::open(&cli.input)
            .with_context(|| format!("failed to open '{}'", cli.input.display()))?;
        runner.run(BufReader::new(file))
    };

    summary.with_context(|| format!("failed to process '{}'", cli.input.display()))
}
