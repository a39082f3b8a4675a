//! Student record definitions.

/// Record kinds, discriminated by the status token on an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Domestic student (status `D`, no TOEFL score).
    Domestic,
    /// International student (status `I`, carries a TOEFL score).
    International,
}

impl RecordKind {
    /// Dispatch on the first character of a status token.
    ///
    /// Any leading character other than `D` or `I` means the line is
    /// unrecognized and produces no record.
    pub fn from_status(token: &str) -> Option<Self> {
        match token.chars().next() {
            Some('D') => Some(RecordKind::Domestic),
            Some('I') => Some(RecordKind::International),
            _ => None,
        }
    }

    /// Returns the single-character kind tag used in report lines.
    pub fn tag(&self) -> char {
        match self {
            RecordKind::Domestic => 'D',
            RecordKind::International => 'I',
        }
    }
}

/// A domestic student entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DomesticStudent {
    /// Full name, "First Last".
    pub name: String,
    /// Grade point average. Expected 0 < gpa <= 4.0, upper bound unchecked.
    pub gpa: f64,
}

/// An international student entry.
#[derive(Debug, Clone, PartialEq)]
pub struct InternationalStudent {
    /// Full name, "First Last".
    pub name: String,
    /// Grade point average. Expected 0 < gpa <= 4.0, upper bound unchecked.
    pub gpa: f64,
    /// TOEFL score. Must be strictly positive to pass validation.
    pub toefl: i32,
}

/// A record of either kind, for traversals that mix the two collections.
///
/// Ordering-relevant fields are exposed uniformly; the kind matters only
/// to output formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum StudentRecord {
    Domestic(DomesticStudent),
    International(InternationalStudent),
}

impl StudentRecord {
    /// Returns the student's full name.
    pub fn name(&self) -> &str {
        match self {
            StudentRecord::Domestic(s) => &s.name,
            StudentRecord::International(s) => &s.name,
        }
    }

    /// Returns the GPA regardless of kind.
    pub fn gpa(&self) -> f64 {
        match self {
            StudentRecord::Domestic(s) => s.gpa,
            StudentRecord::International(s) => s.gpa,
        }
    }

    /// Returns the record's kind.
    pub fn kind(&self) -> RecordKind {
        match self {
            StudentRecord::Domestic(_) => RecordKind::Domestic,
            StudentRecord::International(_) => RecordKind::International,
        }
    }
}

impl From<DomesticStudent> for StudentRecord {
    fn from(record: DomesticStudent) -> Self {
        StudentRecord::Domestic(record)
    }
}

impl From<InternationalStudent> for StudentRecord {
    fn from(record: InternationalStudent) -> Self {
        StudentRecord::International(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_status() {
        assert_eq!(RecordKind::from_status("D"), Some(RecordKind::Domestic));
        assert_eq!(RecordKind::from_status("I"), Some(RecordKind::International));
        // Only the first character matters.
        assert_eq!(RecordKind::from_status("Dom"), Some(RecordKind::Domestic));
        assert_eq!(RecordKind::from_status("Intl"), Some(RecordKind::International));
        assert_eq!(RecordKind::from_status("X"), None);
        assert_eq!(RecordKind::from_status("d"), None);
        assert_eq!(RecordKind::from_status(""), None);
    }

    #[test]
    fn test_kind_tag() {
        assert_eq!(RecordKind::Domestic.tag(), 'D');
        assert_eq!(RecordKind::International.tag(), 'I');
    }

    #[test]
    fn test_mixed_record_accessors() {
        let d: StudentRecord = DomesticStudent {
            name: "Jane Doe".to_string(),
            gpa: 3.95,
        }
        .into();
        let i: StudentRecord = InternationalStudent {
            name: "Wei Li".to_string(),
            gpa: 3.92,
            toefl: 75,
        }
        .into();

        assert_eq!(d.name(), "Jane Doe");
        assert_eq!(d.gpa(), 3.95);
        assert_eq!(d.kind(), RecordKind::Domestic);

        assert_eq!(i.name(), "Wei Li");
        assert_eq!(i.gpa(), 3.92);
        assert_eq!(i.kind(), RecordKind::International);
    }
}
