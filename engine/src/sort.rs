//! FILENAME: engine/src/sort.rs
//! PURPOSE: Stable sorting of report records by any column.
//! CONTEXT: Numeric columns compare numerically, date columns by calendar
//! order, everything else as case-sensitive text. Descending order swaps the
//! comparator operands, so ties keep their input order either way.

use crate::error::ReportError;
use crate::field::FieldKey;
use crate::record::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

impl SortDirection {
    pub fn toggled(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sorts by a column named with its key string. Unknown keys are an error.
pub fn sort_records(
    records: &[Record],
    key: &str,
    direction: SortDirection,
) -> Result<Vec<Record>, ReportError> {
    let field = FieldKey::parse(key)?;
    Ok(sort_by_field(records, field, direction))
}

/// Sorts by an already-resolved column. Returns a new sequence; the input is
/// never mutated.
pub fn sort_by_field(
    records: &[Record],
    field: FieldKey,
    direction: SortDirection,
) -> Vec<Record> {
    let mut sorted = records.to_vec();
    match direction {
        SortDirection::Ascending => {
            sorted.sort_by(|a, b| compare_field(a, b, field));
        }
        SortDirection::Descending => {
            sorted.sort_by(|a, b| compare_field(b, a, field));
        }
    }
    sorted
}

fn compare_field(a: &Record, b: &Record, field: FieldKey) -> Ordering {
    match (a.field(field), b.field(field)) {
        (FieldValue::Number(na), FieldValue::Number(nb)) => {
            na.partial_cmp(&nb).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Date(da), FieldValue::Date(db)) => da.cmp(&db),
        (FieldValue::Text(ta), FieldValue::Text(tb)) => ta.cmp(tb),
        // One key always yields one shape; render anything else as text.
        (va, vb) => va.to_string().cmp(&vb.to_string()),
    }
}
