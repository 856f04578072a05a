//! Shared components for CLI commands
//!
//! This module contains the run statistics, logging setup, configuration
//! loading and input discovery used by more than one command.

use crate::cli::args::ConvertArgs;
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of LAS files found in the inputs
    pub files_discovered: usize,
    /// Number of files whose artifacts were written
    pub files_converted: usize,
    /// Number of files rejected with a fatal error
    pub files_failed: usize,
    /// Data rows written across all files
    pub rows_written: usize,
    /// CSV and JSON files written
    pub artifacts_written: usize,
    /// Size of all written artifacts
    pub bytes_written: u64,
    /// Header lines dropped by the field grammar
    pub malformed_lines: usize,
    /// Data sections skipped inside otherwise converted files
    pub sections_skipped: usize,
    /// Total processing time
    pub processing_time: Duration,
    /// Failed files and their error messages
    pub failures: Vec<(PathBuf, String)>,
}

impl ProcessingStats {
    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }

    /// Share of attempted files that converted, in percent
    pub fn success_rate(&self) -> f64 {
        let attempted = self.files_converted + self.files_failed;
        if attempted == 0 {
            100.0
        } else {
            (self.files_converted as f64 / attempted as f64) * 100.0
        }
    }

    /// Format a size in human-readable units
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging to stderr
///
/// `RUST_LOG` takes precedence over `level`. A second call is a no-op.
pub fn setup_logging(level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("las_processor={}", level)));

    let initialized = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", level);
    }
}

/// Load configuration: defaults or config file, then CLI overrides
pub fn load_configuration(args: &ConvertArgs) -> Result<Config> {
    let mut config = match &args.config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            Config::load_from_file(path)?
        }
        None => Config::default(),
    };

    apply_cli_overrides(&mut config, args);
    config.validate()?;

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &ConvertArgs) {
    if let Some(name) = &args.output_dir_name {
        config.output_dir_name = name.clone();
    }
    if let Some(marker) = &args.missing_marker {
        config.missing_value_marker = marker.clone();
    }
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if args.no_recursive {
        config.recursive = false;
    }
}

/// Expand files, directories and glob patterns into a sorted file list
///
/// Explicit file paths are kept whatever their extension. Directory and
/// pattern matches must carry an accepted extension.
pub fn discover_las_files(inputs: &[String], config: &Config) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = Path::new(input);

        if path.is_file() {
            files.push(path.to_path_buf());
        } else if path.is_dir() {
            files.extend(walk_directory(path, config));
        } else {
            let matches = expand_pattern(input, config)?;
            if matches.is_empty() {
                warn!("No LAS files match input: {}", input);
            }
            files.extend(matches);
        }
    }

    files.sort();
    files.dedup();

    debug!("Discovered {} LAS files", files.len());
    for file in &files {
        debug!("  Found: {}", file.display());
    }

    Ok(files)
}

fn walk_directory(dir: &Path, config: &Config) -> Vec<PathBuf> {
    let max_depth = if config.recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false).max_depth(max_depth) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && config.accepts_extension(path) {
            files.push(path.to_path_buf());
        }
    }

    files
}

fn expand_pattern(pattern: &str, config: &Config) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|e| {
        Error::configuration(format!("Invalid input pattern '{}': {}", pattern, e))
    })?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() && config.accepts_extension(&path) => files.push(path),
            Ok(_) => {}
            Err(e) => warn!("Skipping unreadable match of '{}': {}", pattern, e),
        }
    }

    Ok(files)
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}
