//! Category filter
//!
//! Exact, case-sensitive match on the `type` field. Input order is preserved.

use super::record::Record;

/// Returns the records whose category equals `category`.
///
/// An empty or unknown category yields an empty vector.
pub fn filter_by_type(records: Vec<Record>, category: &str) -> Vec<Record> {
    records
        .into_iter()
        .filter(|record| record.entry_type == category)
        .collect()
}
