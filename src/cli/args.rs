//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--size <N>`: Grid side length (default 1000)
//! - `--json`: Print a JSON summary instead of the bare count
//! - `--debug`: Trace each applied instruction on stderr
//! - `--quiet` / `-q`: Suppress warnings
//! - `--no-config`: Ignore config files

use clap::Parser;
use std::path::{Path, PathBuf};

/// Path value that means "read from stdin".
pub const STDIN_PATH: &str = "-";

/// lights - apply turn on / turn off / toggle instructions to a grid of lights
#[derive(Parser, Debug)]
#[command(name = "lights")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
INSTRUCTIONS:
    turn on 0,0 through 999,999
    turn off 499,499 through 500,500
    toggle 0,0 through 999,0

    Coordinates are row,column pairs naming opposite corners of an inclusive
    rectangle. All lights start off. The number of lit lights is printed
    after the last instruction.")]
pub struct Cli {
    /// File of instructions, one per line ("-" reads stdin)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Side length of the square grid [default: 1000]
    #[arg(long, value_name = "N")]
    pub size: Option<usize>,

    /// Print a JSON summary instead of the bare count
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not read any config file
    #[arg(long)]
    pub no_config: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Check whether input should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new(STDIN_PATH)
    }
}
