//! Student roster ingestion and GPA report pipeline.
//!
//! Reads a roster text file (one student per line, whitespace-delimited
//! fields), validates each record, and writes one of four reports to an
//! output file.
//!
//! # Features
//!
//! - Line parsing into domestic/international records with permissive
//!   numeric fields
//! - Per-kind validation with lenient rejection (invalid records are
//!   counted, not fatal)
//! - Growable record storage with a shared doubling threshold
//! - Filtered, combined and GPA-ranked report modes
//! - Run statistics for every pipeline pass
//!
//! # Example
//!
//! ```ignore
//! use roster_core::{ReportEngine, ReportMode};
//!
//! let engine = ReportEngine::new(ReportMode::RankedByGpa);
//! let stats = engine.run_file("students.txt", "report.txt")?;
//! println!("{} lines written", stats.report_lines);
//! ```

#![forbid(unsafe_code)]

mod engine;
mod error;
mod parser;
mod record;
mod report;
mod sort;
mod store;
mod validate;

pub use engine::{ReportEngine, RunStats};
pub use error::{Result, RosterError};
pub use parser::{parse_line, ParsedLine};
pub use record::{DomesticStudent, InternationalStudent, RecordKind, StudentRecord};
pub use report::{write_report, ReportMode, GPA_THRESHOLD, TOEFL_THRESHOLD};
pub use sort::sort_by_gpa_descending;
pub use store::{RosterStore, INITIAL_CAPACITY};
pub use validate::{is_valid_domestic, is_valid_international};
