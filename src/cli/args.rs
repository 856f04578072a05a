//! Command-line argument definitions for the LAS processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::MAX_WORKERS;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the LAS well-log converter
///
/// Converts LAS 2.0 and 3.0 well-log files into CSV curve data and a JSON
/// header metadata document, tolerating the malformed files strict readers
/// reject.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "las-processor",
    version,
    about = "Convert LAS 2.0/3.0 well-log files into CSV curve data and JSON metadata",
    long_about = "A resilient converter for Log ASCII Standard (LAS) well-log files. \
                  Each input file produces one CSV file per data section and a JSON \
                  document holding its header metadata, written under an output \
                  directory next to the source file. Malformed header lines and broken \
                  data sections are logged and skipped instead of aborting the file."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert LAS files into CSV and JSON artifacts
    Convert(ConvertArgs),
    /// Parse one LAS file and print its structure without writing anything
    Inspect(InspectArgs),
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// LAS files, directories or glob patterns to convert
    ///
    /// Directories are searched for files with an accepted extension
    /// (`las`/`LAS` by default). Patterns such as `wells/**/*.las` are
    /// expanded when the shell has not already done so.
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    pub inputs: Vec<String>,

    /// Name of the directory created next to each source file
    #[arg(
        long = "output-dir-name",
        value_name = "NAME",
        help = "Directory created next to each source file for its artifacts"
    )]
    pub output_dir_name: Option<String>,

    /// Text written in place of null samples
    #[arg(
        long = "missing-marker",
        value_name = "TEXT",
        help = "Marker written in place of null samples (default: NaN)"
    )]
    pub missing_marker: Option<String>,

    /// Number of files converted concurrently
    ///
    /// 1 converts files one after another; 0 uses every available core.
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        help = "Number of files converted concurrently (0: all cores)"
    )]
    pub workers: Option<usize>,

    /// Only look at the top level of directory inputs
    #[arg(long = "no-recursive", help = "Do not descend into subdirectories")]
    pub no_recursive: bool,

    /// Path to a JSON configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// List the files that would be converted without writing anything
    #[arg(
        long = "dry-run",
        help = "Show what would be converted without creating output files"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// LAS file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Also print every recoverable parse event
    #[arg(long = "events", help = "List every recoverable parse event")]
    pub show_events: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// The command, if one was given
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}

impl ConvertArgs {
    /// Validate argument combinations
    pub fn validate(&self) -> Result<()> {
        if self.inputs.iter().any(|i| i.trim().is_empty()) {
            return Err(Error::configuration("Input paths cannot be empty"));
        }

        if let Some(workers) = self.workers {
            if workers > MAX_WORKERS {
                return Err(Error::configuration(format!(
                    "Worker count must be at most {}, got {}",
                    MAX_WORKERS, workers
                )));
            }
        }

        if let Some(name) = &self.output_dir_name {
            if name.trim().is_empty() {
                return Err(Error::configuration("Output directory name cannot be empty"));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Configuration file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Tracing level implied by `-v`/`-q`
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Progress bars are hidden in quiet mode
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl InspectArgs {
    pub fn validate(&self) -> Result<()> {
        if !self.file.is_file() {
            return Err(Error::file_not_found(self.file.display().to_string()));
        }
        Ok(())
    }

    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
