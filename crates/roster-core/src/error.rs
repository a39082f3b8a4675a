//! Error types for the roster pipeline.

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced by roster ingestion and reporting.
#[derive(Debug, Error, Diagnostic)]
pub enum RosterError {
    /// The input roster file could not be opened for reading.
    #[error("cannot open input file '{path}': {detail}")]
    #[diagnostic(code(roster::input_open))]
    InputOpen { path: String, detail: String },

    /// The report output file could not be created.
    #[error("cannot open output file '{path}': {detail}")]
    #[diagnostic(code(roster::output_open))]
    OutputOpen { path: String, detail: String },

    /// A line is missing one of the four required fields
    /// (first name, last name, gpa, status).
    #[error("malformed record at line {line}: expected at least 4 fields, found {found}")]
    #[diagnostic(code(roster::malformed_record))]
    MalformedRecord { line: usize, found: usize },

    /// Growing the record store to the requested capacity failed.
    #[error("record storage exhausted growing to {requested} entries per kind: {detail}")]
    #[diagnostic(code(roster::storage_exhausted))]
    StorageExhausted { requested: usize, detail: String },

    /// I/O failure while reading input or writing the report.
    #[error("I/O error: {0}")]
    #[diagnostic(code(roster::io))]
    Io(#[from] std::io::Error),
}

/// Result type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
