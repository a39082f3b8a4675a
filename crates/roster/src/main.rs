//! Roster CLI: batch GPA reports over student roster files.
//!
//! Reads one roster text file, validates its records, and writes the
//! selected report to the output file. All diagnostics go to stderr so
//! they never mix with report output. Fatal errors print a one-line
//! `Error:` message and exit with status 1; an unrecognized mode
//! selector is not fatal (the run ingests input and writes nothing).

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use roster_core::{ReportEngine, ReportMode};

/// Roster CLI.
#[derive(Parser)]
#[command(name = "roster", about = "Student roster GPA report tool")]
struct Cli {
    /// Input roster file (one student per line).
    input: PathBuf,

    /// Output report file (created or truncated).
    output: PathBuf,

    /// Report mode: 1 domestic, 2 international, 3 combined, 4 ranked.
    mode: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // try_parse instead of parse: usage errors exit 1 like every other
    // fatal condition, while --help and --version still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let engine = match ReportMode::from_selector(&cli.mode) {
        Some(mode) => {
            info!(
                mode = mode.selector(),
                input = %cli.input.display(),
                output = %cli.output.display(),
                "starting run"
            );
            ReportEngine::new(mode)
        }
        None => {
            warn!(selector = %cli.mode, "unrecognized report mode, no report will be written");
            ReportEngine::no_report()
        }
    };

    if let Err(e) = engine.run_file(&cli.input, &cli.output) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
