//! Line parsing for roster input files.
//!
//! Each input line carries up to five whitespace-delimited fields:
//! first name, last name, gpa, status token, and (international only) a
//! TOEFL score. The first four are required; a line missing any of them
//! is a malformed record and aborts the run.

use tracing::warn;

use crate::error::{Result, RosterError};
use crate::record::{DomesticStudent, InternationalStudent, RecordKind};

/// Outcome of parsing one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// The line describes a domestic student.
    Domestic(DomesticStudent),
    /// The line describes an international student.
    International(InternationalStudent),
    /// The status token starts with neither `D` nor `I`; the line is
    /// skipped without producing a record.
    Unrecognized,
}

/// Parses one input line into a typed record.
///
/// `line_number` is 1-based and only used for error reporting. Numeric
/// fields use leading-prefix semantics: the longest numeric prefix is
/// taken and anything after it ignored, with no prefix at all yielding
/// zero. Strict range checking is the validator's job.
pub fn parse_line(line: &str, line_number: usize) -> Result<ParsedLine> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(RosterError::MalformedRecord {
            line: line_number,
            found: fields.len(),
        });
    }

    let name = format!("{} {}", fields[0], fields[1]);
    let gpa = float_prefix(fields[2]);

    match RecordKind::from_status(fields[3]) {
        Some(RecordKind::Domestic) => Ok(ParsedLine::Domestic(DomesticStudent { name, gpa })),
        Some(RecordKind::International) => {
            let toefl = fields.get(4).map_or(0, |f| int_prefix(f));
            if toefl <= 0 {
                warn!(student = %name, toefl, "invalid TOEFL score");
            }
            Ok(ParsedLine::International(InternationalStudent {
                name,
                gpa,
                toefl,
            }))
        }
        None => Ok(ParsedLine::Unrecognized),
    }
}

/// Longest leading float literal in `text` (after leading whitespace),
/// or 0.0 if there is none.
fn float_prefix(text: &str) -> f64 {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in text.char_indices() {
        let accepted = match c {
            '0'..='9' => true,
            '+' | '-' => i == 0,
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        };
        if !accepted {
            break;
        }
        end = i + c.len_utf8();
    }
    text[..end].parse().unwrap_or(0.0)
}

/// Longest leading integer literal in `text` (after leading whitespace),
/// or 0 if there is none. Also used for CLI mode selectors, which follow
/// the same permissive convention.
pub(crate) fn int_prefix(text: &str) -> i32 {
    let text = text.trim_start();
    let mut end = 0;
    for (i, c) in text.char_indices() {
        let accepted = match c {
            '0'..='9' => true,
            '+' | '-' => i == 0,
            _ => false,
        };
        if !accepted {
            break;
        }
        end = i + c.len_utf8();
    }
    text[..end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_domestic_line() {
        let parsed = parse_line("Jane Doe 3.95 D", 1).unwrap();
        assert_eq!(
            parsed,
            ParsedLine::Domestic(DomesticStudent {
                name: "Jane Doe".to_string(),
                gpa: 3.95,
            })
        );
    }

    #[test]
    fn test_parse_international_line() {
        let parsed = parse_line("Wei Li 3.92 I 75", 1).unwrap();
        assert_eq!(
            parsed,
            ParsedLine::International(InternationalStudent {
                name: "Wei Li".to_string(),
                gpa: 3.92,
                toefl: 75,
            })
        );
    }

    #[test]
    fn test_status_dispatch_uses_first_char_only() {
        let parsed = parse_line("Jane Doe 3.95 Dom", 1).unwrap();
        assert!(matches!(parsed, ParsedLine::Domestic(_)));

        let parsed = parse_line("Wei Li 3.92 Intl 75", 1).unwrap();
        assert!(matches!(parsed, ParsedLine::International(_)));
    }

    #[test]
    fn test_unrecognized_status_is_skipped() {
        assert_eq!(parse_line("Sam Park 3.80 X 80", 1).unwrap(), ParsedLine::Unrecognized);
        // Lowercase tags do not match.
        assert_eq!(parse_line("Sam Park 3.80 d", 1).unwrap(), ParsedLine::Unrecognized);
    }

    #[test]
    fn test_missing_fields_is_malformed() {
        let err = parse_line("Jane Doe", 7).unwrap_err();
        match err {
            RosterError::MalformedRecord { line, found } => {
                assert_eq!(line, 7);
                assert_eq!(found, 2);
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_line_is_malformed() {
        let err = parse_line("", 3).unwrap_err();
        assert!(matches!(err, RosterError::MalformedRecord { line: 3, found: 0 }));
    }

    #[test]
    fn test_missing_toefl_defaults_to_zero() {
        let parsed = parse_line("Wei Li 3.92 I", 1).unwrap();
        match parsed {
            ParsedLine::International(record) => assert_eq!(record.toefl, 0),
            other => panic!("expected international record, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let parsed = parse_line("Jane Doe 3.95 D extra junk", 1).unwrap();
        assert!(matches!(parsed, ParsedLine::Domestic(_)));
    }

    #[test]
    fn test_repeated_whitespace_collapses() {
        let parsed = parse_line("  Jane   Doe\t3.95  D ", 1).unwrap();
        match parsed {
            ParsedLine::Domestic(record) => {
                assert_eq!(record.name, "Jane Doe");
                assert_eq!(record.gpa, 3.95);
            }
            other => panic!("expected domestic record, got {other:?}"),
        }
    }

    #[test]
    fn test_float_prefix() {
        assert_eq!(float_prefix("3.9"), 3.9);
        assert_eq!(float_prefix("3.9abc"), 3.9);
        assert_eq!(float_prefix(".5"), 0.5);
        assert_eq!(float_prefix("-2.0"), -2.0);
        assert_eq!(float_prefix("abc"), 0.0);
        assert_eq!(float_prefix(""), 0.0);
        assert_eq!(float_prefix("."), 0.0);
        assert_eq!(float_prefix("4"), 4.0);
    }

    #[test]
    fn test_int_prefix() {
        assert_eq!(int_prefix("75"), 75);
        assert_eq!(int_prefix("75pts"), 75);
        assert_eq!(int_prefix("-3"), -3);
        assert_eq!(int_prefix(" 2"), 2);
        assert_eq!(int_prefix("abc"), 0);
        assert_eq!(int_prefix(""), 0);
    }

    #[test]
    fn test_non_numeric_gpa_parses_to_zero() {
        let parsed = parse_line("Jane Doe xyz D", 1).unwrap();
        match parsed {
            ParsedLine::Domestic(record) => assert_eq!(record.gpa, 0.0),
            other => panic!("expected domestic record, got {other:?}"),
        }
    }
}
