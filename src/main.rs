use anyhow::Context;
use clap::Parser;
use las_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match run(args) {
        Ok(true) => process::exit(0),
        // Per-file failures were already logged and summarized
        Ok(false) => process::exit(1),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Run the selected command; `Ok(false)` when some input files failed
fn run(args: Args) -> anyhow::Result<bool> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

    let stats = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            _ = interrupted() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(las_processor::Error::processing_interrupted(
                    "Processing interrupted by user",
                ))
            }
        }
    })?;

    Ok(!stats.has_failures())
}

/// Resolves on CTRL+C; never resolves if the handler cannot be installed
async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("LAS Processor - Well-Log LAS 2.0/3.0 Converter");
    println!("==============================================");
    println!();
    println!("Convert LAS well-log files into CSV curve data and JSON header metadata.");
    println!("Malformed header lines and broken data sections are skipped, not fatal.");
    println!();
    println!("USAGE:");
    println!("    las-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert LAS files, directories or glob patterns");
    println!("    inspect     Print the structure of one LAS file without writing");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert every LAS file under a directory:");
    println!("    las-processor convert /data/wells");
    println!();
    println!("    # Convert with four workers and an empty missing-value marker:");
    println!("    las-processor convert '/data/wells/**/*.las' -j 4 --missing-marker ''");
    println!();
    println!("    # Look at how a file is parsed:");
    println!("    las-processor inspect /data/wells/A-1.las --events");
    println!();
    println!("For detailed help on any command, use:");
    println!("    las-processor <COMMAND> --help");
}
