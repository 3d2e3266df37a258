//! FILENAME: engine/src/date.rs
//! PURPOSE: Strict report-date parsing and the validated date range used by
//! date-wise filtering.
//! CONTEXT: Dates arrive from the filter form as `YYYY-MM-DD` strings. A
//! string that does not parse, or a range with `from` after `to`, is a
//! `ReportError::InvalidDateRange` - never a silent fallback date.

use crate::error::ReportError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire format for report dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date string.
pub fn parse_date(input: &str) -> Result<NaiveDate, ReportError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ReportError::InvalidDateRange(format!("Unparseable date: {}", input)))
}

/// An inclusive calendar-date range with `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<DateRange, ReportError> {
        if from > to {
            return Err(ReportError::InvalidDateRange(format!(
                "From date {} is after to date {}",
                from, to
            )));
        }
        Ok(DateRange { from, to })
    }

    /// Parses and validates both ends of a range.
    pub fn parse(from: &str, to: &str) -> Result<DateRange, ReportError> {
        DateRange::new(parse_date(from)?, parse_date(to)?)
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("2024-01-02").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(parse_date("01/02/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let result = DateRange::parse("2024-02-01", "2024-01-01");
        assert!(matches!(result, Err(ReportError::InvalidDateRange(_))));
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = DateRange::parse("2024-01-10", "2024-01-20").unwrap();
        assert!(range.contains(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()));
        assert!(range.contains(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2024, 1, 21).unwrap()));
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::parse("2024-01-15", "2024-01-15").unwrap();
        assert!(range.contains(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()));
    }
}
