//! Descending-GPA ordering for mixed-kind record sequences.

use crate::record::StudentRecord;

/// Selection sort by GPA, highest first.
///
/// For each position the maximum-GPA record among the unsorted suffix is
/// swapped into place. The scan uses a strict comparison, so on equal
/// GPAs the earliest remaining record wins; records that are already in
/// order keep their relative positions only incidentally (this is not a
/// stable sort). O(n²), acceptable at class-roster sizes.
pub fn sort_by_gpa_descending(records: &mut [StudentRecord]) {
    let count = records.len();
    for i in 0..count.saturating_sub(1) {
        let mut max_index = i;
        for j in (i + 1)..count {
            if records[j].gpa() > records[max_index].gpa() {
                max_index = j;
            }
        }
        records.swap(i, max_index);
    }
}
