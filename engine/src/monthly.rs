//! FILENAME: engine/src/monthly.rs
//! PURPOSE: Records-added-per-month aggregation for the report bar chart.
//! CONTEXT: Counts are keyed by the calendar month of `added_on` only. The
//! result is calendar-ordered (Jan..Dec) with zero-count months omitted, and
//! is handed as-is to the external chart-rendering collaborator.

use crate::record::Record;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Short month labels in calendar order.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One bar of the chart: a month that has at least one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub month: String,
    pub count: usize,
}

/// Counts records per calendar month of `added_on`.
pub fn aggregate_by_month(records: &[Record]) -> Vec<MonthlyCount> {
    let mut counts = [0usize; 12];
    for record in records {
        counts[record.added_on.month0() as usize] += 1;
    }

    MONTH_LABELS
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| MonthlyCount {
            month: (*label).to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::generate_dataset;

    #[test]
    fn test_counts_sum_to_dataset_size() {
        let records = generate_dataset(200);
        let monthly = aggregate_by_month(&records);
        let total: usize = monthly.iter().map(|m| m.count).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_result_is_calendar_ordered_not_count_ordered() {
        // 90 records span Jan 2 .. Mar 31 2024 with uneven counts per month.
        let records = generate_dataset(90);
        let monthly = aggregate_by_month(&records);
        let months: Vec<&str> = monthly.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["Jan", "Feb", "Mar"]);
        // 30 in January, 29 in leap February, 31 in March - count order would
        // put February last.
        let counts: Vec<usize> = monthly.iter().map(|m| m.count).collect();
        assert_eq!(counts, vec![30, 29, 31]);
    }

    #[test]
    fn test_zero_count_months_are_omitted() {
        let records = generate_dataset(10);
        let monthly = aggregate_by_month(&records);
        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly[0].month, "Jan");
        assert_eq!(monthly[0].count, 10);
    }

    #[test]
    fn test_empty_dataset() {
        assert!(aggregate_by_month(&[]).is_empty());
    }
}
