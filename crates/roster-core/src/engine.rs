//! Pipeline driver.
//!
//! Ties the parser, validator, store and reporters together: one pass
//! over the input committing valid records, then reporter dispatch for
//! the selected mode. An engine built with `no_report` still ingests
//! input (so malformed lines stay fatal) and still truncates the output
//! file, but writes nothing; that is how an unrecognized mode selector
//! behaves at the CLI.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, RosterError};
use crate::parser::{parse_line, ParsedLine};
use crate::report::{write_report, ReportMode};
use crate::store::RosterStore;
use crate::validate::{is_valid_domestic, is_valid_international};

/// Engine for one roster run.
pub struct ReportEngine {
    /// Report mode, or `None` for an ingest-only no-report run.
    mode: Option<ReportMode>,
}

impl ReportEngine {
    /// Creates an engine that writes the report for `mode`.
    pub fn new(mode: ReportMode) -> Self {
        Self { mode: Some(mode) }
    }

    /// Creates an engine that ingests input but writes no report.
    pub fn no_report() -> Self {
        Self { mode: None }
    }

    /// Runs the pipeline over open input and output streams.
    ///
    /// Reads every line before any report line is written; a malformed
    /// line therefore aborts the run with nothing reported.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<RunStats> {
        let mut stats = RunStats::default();
        let mut store = RosterStore::new()?;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            stats.lines_read += 1;
            match parse_line(&line, index + 1)? {
                ParsedLine::Domestic(record) => {
                    if is_valid_domestic(&record) {
                        store.commit_domestic(record)?;
                        stats.domestic_records += 1;
                    } else {
                        debug!(line = index + 1, "domestic record rejected");
                        stats.rejected_records += 1;
                    }
                }
                ParsedLine::International(record) => {
                    if is_valid_international(&record) {
                        store.commit_international(record)?;
                        stats.international_records += 1;
                    } else {
                        debug!(line = index + 1, "international record rejected");
                        stats.rejected_records += 1;
                    }
                }
                ParsedLine::Unrecognized => {
                    debug!(line = index + 1, "unrecognized status, line skipped");
                    stats.skipped_lines += 1;
                }
            }
        }

        if let Some(mode) = self.mode {
            stats.report_lines = write_report(mode, &store, &mut writer)?;
        }
        writer.flush()?;

        info!(
            lines = stats.lines_read,
            domestic = stats.domestic_records,
            international = stats.international_records,
            rejected = stats.rejected_records,
            skipped = stats.skipped_lines,
            report_lines = stats.report_lines,
            "run complete"
        );
        Ok(stats)
    }

    /// Runs the pipeline over files.
    ///
    /// The input is opened first, then the output is created (truncated)
    /// before any line is read, so a fatal mid-run error leaves an empty
    /// or partial output file.
    pub fn run_file<P: AsRef<Path>>(&self, input: P, output: P) -> Result<RunStats> {
        let input_path = input.as_ref();
        let output_path = output.as_ref();

        let input_file = File::open(input_path).map_err(|e| RosterError::InputOpen {
            path: input_path.display().to_string(),
            detail: e.to_string(),
        })?;
        let output_file = File::create(output_path).map_err(|e| RosterError::OutputOpen {
            path: output_path.display().to_string(),
            detail: e.to_string(),
        })?;

        self.run(BufReader::new(input_file), BufWriter::new(output_file))
    }
}

/// Statistics from one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Lines read from the input.
    pub lines_read: usize,
    /// Lines skipped for an unrecognized status token.
    pub skipped_lines: usize,
    /// Structurally complete records rejected by validation.
    pub rejected_records: usize,
    /// Committed domestic records.
    pub domestic_records: usize,
    /// Committed international records.
    pub international_records: usize,
    /// Report lines written (zero for a no-report run).
    pub report_lines: usize,
}
