//! Record validation predicates.
//!
//! Pure checks with no side effects. The engine commits a record into
//! its collection only when the predicate for its kind holds; rejected
//! records are dropped and counted, never fatal.

use crate::record::{DomesticStudent, InternationalStudent};

/// A domestic record is valid when it has a name and a positive GPA.
pub fn is_valid_domestic(record: &DomesticStudent) -> bool {
    !record.name.is_empty() && record.gpa > 0.0
}

/// An international record additionally needs a positive TOEFL score.
pub fn is_valid_international(record: &InternationalStudent) -> bool {
    !record.name.is_empty() && record.gpa > 0.0 && record.toefl > 0
}
