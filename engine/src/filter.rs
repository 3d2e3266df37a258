//! FILENAME: engine/src/filter.rs
//! PURPOSE: The three report filters - APN-wise, date-wise, account-wise.
//! CONTEXT: All filters are pure and single-pass. An empty result is a valid
//! result; "no filter submitted yet" is tracked by the caller's report state,
//! not encoded here.

use crate::date::DateRange;
use crate::record::{Apn, Record};

/// Records whose APN matches `apn`.
pub fn filter_by_apn(records: &[Record], apn: Apn) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.apn == apn)
        .cloned()
        .collect()
}

/// Records whose APN matches and whose `added_on` lies inside `range`,
/// inclusive on both ends.
pub fn filter_by_date_range(records: &[Record], apn: Apn, range: &DateRange) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.apn == apn && range.contains(record.added_on))
        .cloned()
        .collect()
}

/// Records whose mobile number matches exactly.
pub fn filter_by_account(records: &[Record], mobile_number: &str) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.mobile_number == mobile_number)
        .cloned()
        .collect()
}
