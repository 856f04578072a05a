//! Inspect command implementation
//!
//! Parses a single file and prints what the parser saw: declarations,
//! sections with their line ranges and the reconstructed row-sets.

use super::shared::{ProcessingStats, setup_logging};
use crate::app::services::las_parser::{LasParser, ParseResult, RecordingSink};
use crate::cli::args::InspectArgs;
use crate::{Error, Result};

use colored::*;
use tracing::info;

/// Inspect command runner
pub async fn run_inspect(args: InspectArgs) -> Result<ProcessingStats> {
    setup_logging(args.get_log_level(), false);
    args.validate()?;
    info!("Inspecting {}", args.file.display());

    let bytes = std::fs::read(&args.file)
        .map_err(|e| Error::io(format!("Failed to read {}", args.file.display()), e))?;
    let content = String::from_utf8_lossy(&bytes);

    let mut sink = RecordingSink::new();
    let result = LasParser::default().parse_str(&content, &args.file, &mut sink)?;

    print_report(&result);

    if args.show_events {
        println!("\n{}", "Events".bright_green().bold());
        for event in &sink.events {
            println!("  {:?}", event);
        }
    }

    Ok(ProcessingStats {
        files_discovered: 1,
        ..Default::default()
    })
}

fn print_report(result: &ParseResult) {
    let document = &result.document;

    println!("{}", document.file_name().bright_green().bold());
    println!("  {} {}", "Version:".bright_cyan(), document.version);
    println!(
        "  {} {}",
        "Wrap:".bright_cyan(),
        if document.wrap { "YES" } else { "NO" }
    );
    println!("  {} {}", "Delimiter:".bright_cyan(), document.delimiter);
    println!(
        "  {} {}",
        "Declared NULL:".bright_cyan(),
        document.declared_null.as_deref().unwrap_or("-")
    );

    println!("\n{}", "Sections".bright_green().bold());
    for section in &result.sections {
        println!(
            "  {:<4} {:<40} lines {}..={} ({})",
            section.id,
            section.name,
            section.start,
            section.end,
            section.line_count()
        );
    }

    println!("\n{}", "Metadata labels".bright_green().bold());
    for label in document.metadata.labels() {
        println!("  {}", label);
    }

    println!("\n{}", "Row-sets".bright_green().bold());
    for row_set in &document.row_sets {
        println!(
            "  {:<24} {} curves, {} rows",
            row_set.section.as_deref().unwrap_or("~A"),
            row_set.curves.len(),
            row_set.row_count()
        );
    }

    let stats = &result.stats;
    println!(
        "\n  {} {} malformed lines, {} sections skipped, {} length mismatches, {} wrapped records dropped",
        "Recovered:".bright_yellow(),
        stats.malformed_lines,
        stats.sections_skipped,
        stats.row_length_mismatches,
        stats.wrapped_records_dropped
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::las_parser::tests::LAS2_UNWRAPPED;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_inspect_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("well.las");
        std::fs::write(&file, LAS2_UNWRAPPED).unwrap();

        let stats = run_inspect(InspectArgs {
            file,
            show_events: true,
            verbose: 0,
        })
        .await
        .unwrap();

        assert_eq!(stats.files_discovered, 1);
        assert!(!temp_dir.path().join("outputDir").exists());
    }

    #[tokio::test]
    async fn test_inspect_missing_file() {
        let result = run_inspect(InspectArgs {
            file: "/nonexistent/well.las".into(),
            show_events: false,
            verbose: 0,
        })
        .await;
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }
}
