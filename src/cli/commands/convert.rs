//! Convert command implementation
//!
//! Discovers LAS files, runs the parser and the writer on each one and
//! reports a summary. A fatal error in one file is logged and counted; the
//! batch moves on to the next file.

use super::shared::{
    ProcessingStats, create_progress_bar, discover_las_files, load_configuration, setup_logging,
};
use crate::app::services::las_parser::{LasParser, ParseStats, TracingSink};
use crate::app::services::output_writer::{OutputLayout, OutputWriter, WrittenArtifacts};
use crate::cli::args::ConvertArgs;
use crate::config::Config;
use crate::{Error, Result};

use colored::*;
use futures::stream::{self, StreamExt};
use indicatif::{HumanDuration, ProgressBar};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;
use tracing::{debug, error, info};

/// What one converted file produced
#[derive(Debug, Clone)]
pub struct FileConversion {
    pub artifacts: WrittenArtifacts,
    pub parse_stats: ParseStats,
}

/// Parse one file and write its artifacts
pub fn convert_file(
    path: &Path,
    parser: &LasParser,
    writer: &OutputWriter,
) -> Result<FileConversion> {
    let mut sink = TracingSink::new(path.display().to_string());
    let result = parser.parse_file(path, &mut sink)?;

    debug!(
        "Parsed {}: LAS {}, {} row-set(s), {} rows",
        path.display(),
        result.document.version,
        result.document.row_sets.len(),
        result.stats.rows_emitted
    );

    let artifacts = writer.write(&result.document)?;
    Ok(FileConversion {
        artifacts,
        parse_stats: result.stats,
    })
}

/// Convert command runner
///
/// 1. Set up logging and configuration
/// 2. Discover input files
/// 3. Convert each file, sequentially or on a bounded worker pool
/// 4. Print the summary
pub async fn run_convert(args: ConvertArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet);
    info!("Starting LAS processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = load_configuration(&args)?;

    let files = discover_las_files(&args.inputs, &config)?;
    info!("Discovered {} LAS files", files.len());

    if args.dry_run {
        return Ok(run_dry_run(&config, &files));
    }

    let mut stats = convert_files(&files, &config, args.show_progress()).await?;
    stats.processing_time = start_time.elapsed();

    if !args.quiet {
        print_summary(&stats);
    }

    Ok(stats)
}

/// Convert `files` with the given configuration
pub async fn convert_files(
    files: &[PathBuf],
    config: &Config,
    show_progress: bool,
) -> Result<ProcessingStats> {
    let mut stats = ProcessingStats {
        files_discovered: files.len(),
        ..Default::default()
    };

    if files.is_empty() {
        return Ok(stats);
    }

    let parser = Arc::new(LasParser::from_config(config));
    let writer = Arc::new(OutputWriter::from_config(config));
    let workers = config.effective_workers();

    let progress_bar =
        show_progress.then(|| create_progress_bar(files.len() as u64, "Converting LAS files"));

    if workers > 1 && files.len() > 1 {
        info!(
            "Converting {} files with {} workers",
            files.len(),
            workers
        );

        let mut outcomes = stream::iter(files.iter().cloned())
            .map(|path| {
                let parser = Arc::clone(&parser);
                let writer = Arc::clone(&writer);
                async move {
                    let task_path = path.clone();
                    let joined = tokio::task::spawn_blocking(move || {
                        convert_file(&task_path, &parser, &writer)
                    })
                    .await;
                    let outcome = worker_outcome(&path, joined);
                    (path, outcome)
                }
            })
            .buffer_unordered(workers);

        while let Some((path, outcome)) = outcomes.next().await {
            record_outcome(&mut stats, &path, outcome, progress_bar.as_ref())?;
        }
    } else {
        info!("Converting {} files sequentially", files.len());

        for path in files {
            if let Some(pb) = &progress_bar {
                pb.set_message(format!("Converting {}", display_name(path)));
            }
            let outcome = convert_file(path, &parser, &writer);
            record_outcome(&mut stats, path, outcome, progress_bar.as_ref())?;
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message(format!("Converted {} files", stats.files_converted));
    }

    stats.failures.sort();
    Ok(stats)
}

/// A worker that panicked or was cancelled fails only its own file
fn worker_outcome(
    path: &Path,
    joined: std::result::Result<Result<FileConversion>, JoinError>,
) -> Result<FileConversion> {
    joined.unwrap_or_else(|e| {
        Err(Error::worker_failed(path.display().to_string(), e.to_string()))
    })
}

/// Fold one file's outcome into the run statistics
///
/// Only run-level errors are returned; per-file errors are logged.
fn record_outcome(
    stats: &mut ProcessingStats,
    path: &Path,
    outcome: Result<FileConversion>,
    progress_bar: Option<&ProgressBar>,
) -> Result<()> {
    if let Some(pb) = progress_bar {
        pb.inc(1);
    }

    match outcome {
        Ok(conversion) => {
            stats.files_converted += 1;
            stats.rows_written += conversion.artifacts.rows_written;
            stats.artifacts_written += conversion.artifacts.artifact_count();
            stats.bytes_written += conversion.artifacts.bytes_written;
            stats.malformed_lines += conversion.parse_stats.malformed_lines;
            stats.sections_skipped += conversion.parse_stats.sections_skipped;
            Ok(())
        }
        Err(e) if e.is_fatal_for_run() => Err(e),
        Err(e) => {
            error!("Failed to convert {}: {}", path.display(), e);
            stats.files_failed += 1;
            stats.failures.push((path.to_path_buf(), e.to_string()));
            Ok(())
        }
    }
}

/// List what would be converted without writing anything
fn run_dry_run(config: &Config, files: &[PathBuf]) -> ProcessingStats {
    info!("Performing dry run - no files will be created");
    let writer = OutputWriter::from_config(config);

    for path in files {
        let target = OutputLayout::for_source(path, writer.output_dir_name());
        println!(
            "  {} {} {}",
            path.display(),
            "->".bright_black(),
            target.document_dir().display()
        );
    }
    println!(
        "\n{} {} files would be converted",
        "Dry run:".bright_yellow().bold(),
        files.len().to_string().bright_white().bold()
    );

    ProcessingStats {
        files_discovered: files.len(),
        ..Default::default()
    }
}

fn print_summary(stats: &ProcessingStats) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Files discovered:".bright_cyan(),
        stats.files_discovered.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Files converted:".bright_cyan(),
        stats.files_converted.to_string().bright_white().bold()
    );
    if stats.has_failures() {
        println!(
            "  {} {}",
            "Files failed:".bright_cyan(),
            stats.files_failed.to_string().bright_red().bold()
        );
        for (path, message) in &stats.failures {
            println!("    {} {}", path.display().to_string().red(), message);
        }
    }
    println!(
        "  {} {}",
        "Rows written:".bright_cyan(),
        stats.rows_written.to_string().bright_white().bold()
    );
    println!(
        "  {} {} ({})",
        "Artifacts written:".bright_cyan(),
        stats.artifacts_written.to_string().bright_white().bold(),
        ProcessingStats::format_size(stats.bytes_written)
    );
    if stats.malformed_lines > 0 || stats.sections_skipped > 0 {
        println!(
            "  {} {} malformed header lines, {} skipped data sections",
            "Recovered:".bright_yellow(),
            stats.malformed_lines,
            stats.sections_skipped
        );
    }
    println!(
        "  {} {:.1}% in {}",
        "Success rate:".bright_cyan(),
        stats.success_rate(),
        HumanDuration(stats.processing_time)
    );
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
