//! Report generation.
//!
//! Four report modes traverse the committed collections read-only and
//! append one formatted line per qualifying record:
//!
//! | Mode | Records           | Filter                     | Line format        |
//! |------|-------------------|----------------------------|--------------------|
//! | 1    | domestic          | gpa > 3.9                  | `name gpa D`       |
//! | 2    | international     | gpa > 3.9 and toefl >= 70  | `name gpa I toefl` |
//! | 3    | both, interleaved | rules 1 and 2 per kind     | as above           |
//! | 4    | both, ranked      | none, descending gpa order | `name gpa tag`     |
//!
//! GPA is always rendered with three decimal places.

use std::io::Write;

use crate::error::Result;
use crate::parser::int_prefix;
use crate::record::{DomesticStudent, InternationalStudent, RecordKind, StudentRecord};
use crate::sort::sort_by_gpa_descending;
use crate::store::RosterStore;

/// GPA must exceed this to appear in the filtered reports (modes 1-3).
pub const GPA_THRESHOLD: f64 = 3.9;

/// Minimum TOEFL score for the international reports (modes 2-3).
pub const TOEFL_THRESHOLD: i32 = 70;

/// The four report modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Mode 1: domestic records above the GPA threshold.
    DomesticHighGpa,
    /// Mode 2: international records above the GPA and TOEFL thresholds.
    InternationalQualified,
    /// Mode 3: modes 1 and 2 in one interleaved pass.
    Combined,
    /// Mode 4: every committed record, ordered by gpa descending.
    RankedByGpa,
}

impl ReportMode {
    /// Resolves a CLI mode selector.
    ///
    /// The selector is read with leading-integer-prefix semantics, so
    /// `"01"` selects mode 1 while `"abc"` or `"5"` resolve to `None`
    /// (an unrecognized mode, which callers treat as a no-op run).
    pub fn from_selector(selector: &str) -> Option<Self> {
        match int_prefix(selector) {
            1 => Some(ReportMode::DomesticHighGpa),
            2 => Some(ReportMode::InternationalQualified),
            3 => Some(ReportMode::Combined),
            4 => Some(ReportMode::RankedByGpa),
            _ => None,
        }
    }

    /// Returns the canonical selector digit.
    pub fn selector(&self) -> &'static str {
        match self {
            ReportMode::DomesticHighGpa => "1",
            ReportMode::InternationalQualified => "2",
            ReportMode::Combined => "3",
            ReportMode::RankedByGpa => "4",
        }
    }
}

/// Writes the report for `mode` over the committed records.
///
/// Returns the number of lines written.
pub fn write_report<W: Write>(
    mode: ReportMode,
    store: &RosterStore,
    writer: &mut W,
) -> Result<usize> {
    match mode {
        ReportMode::DomesticHighGpa => write_domestic_high_gpa(store, writer),
        ReportMode::InternationalQualified => write_international_qualified(store, writer),
        ReportMode::Combined => write_combined(store, writer),
        ReportMode::RankedByGpa => write_ranked(store, writer),
    }
}

fn qualifies_domestic(record: &DomesticStudent) -> bool {
    record.gpa > GPA_THRESHOLD
}

fn qualifies_international(record: &InternationalStudent) -> bool {
    record.gpa > GPA_THRESHOLD && record.toefl >= TOEFL_THRESHOLD
}

fn domestic_line(record: &DomesticStudent) -> String {
    format!(
        "{} {:.3} {}",
        record.name,
        record.gpa,
        RecordKind::Domestic.tag()
    )
}

fn international_line(record: &InternationalStudent) -> String {
    format!(
        "{} {:.3} {} {}",
        record.name,
        record.gpa,
        RecordKind::International.tag(),
        record.toefl
    )
}

fn ranked_line(record: &StudentRecord) -> String {
    format!(
        "{} {:.3} {}",
        record.name(),
        record.gpa(),
        record.kind().tag()
    )
}

fn write_domestic_high_gpa<W: Write>(store: &RosterStore, writer: &mut W) -> Result<usize> {
    let mut lines = 0;
    for record in store.domestic() {
        if qualifies_domestic(record) {
            writeln!(writer, "{}", domestic_line(record))?;
            lines += 1;
        }
    }
    Ok(lines)
}

fn write_international_qualified<W: Write>(store: &RosterStore, writer: &mut W) -> Result<usize> {
    let mut lines = 0;
    for record in store.international() {
        if qualifies_international(record) {
            writeln!(writer, "{}", international_line(record))?;
            lines += 1;
        }
    }
    Ok(lines)
}

/// One pass over both collections by parallel index: at each step the
/// current domestic record is considered first, then the current
/// international record. Output order is domestic[0], international[0],
/// domestic[1], international[1], and so on.
fn write_combined<W: Write>(store: &RosterStore, writer: &mut W) -> Result<usize> {
    let domestic = store.domestic();
    let international = store.international();
    let mut lines = 0;
    let mut d = 0;
    let mut i = 0;

    while d < domestic.len() || i < international.len() {
        if let Some(record) = domestic.get(d) {
            if qualifies_domestic(record) {
                writeln!(writer, "{}", domestic_line(record))?;
                lines += 1;
            }
            d += 1;
        }
        if let Some(record) = international.get(i) {
            if qualifies_international(record) {
                writeln!(writer, "{}", international_line(record))?;
                lines += 1;
            }
            i += 1;
        }
    }
    Ok(lines)
}

/// Every committed record of both kinds, gpa descending, no filter and
/// no toefl field even for international entries.
fn write_ranked<W: Write>(store: &RosterStore, writer: &mut W) -> Result<usize> {
    let mut all = store.collect_all();
    sort_by_gpa_descending(&mut all);
    for record in &all {
        writeln!(writer, "{}", ranked_line(record))?;
    }
    Ok(all.len())
}
