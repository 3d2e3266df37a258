//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the APN report engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.
//! Every operation is a pure, single-pass transform over `&[Record]`; the
//! only state lives in `ReportState`, which the caller owns.

pub mod dataset;
pub mod date;
pub mod error;
pub mod field;
pub mod filter;
pub mod monthly;
pub mod paginate;
pub mod record;
pub mod report;
pub mod sort;

// Re-export commonly used types at the crate root
pub use dataset::generate_dataset;
pub use date::{parse_date, DateRange, DATE_FORMAT};
pub use error::ReportError;
pub use field::{FieldDescriptor, FieldKey, REPORT_FIELDS};
pub use filter::{filter_by_account, filter_by_apn, filter_by_date_range};
pub use monthly::{aggregate_by_month, MonthlyCount, MONTH_LABELS};
pub use paginate::{paginate, total_pages};
pub use record::{Apn, FieldValue, Package, Record};
pub use report::{
    ReportFilter, ReportState, ReportView, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
pub use sort::{sort_by_field, sort_records, SortDirection};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_filters_sorts_and_pages() {
        let dataset = generate_dataset(100);
        let ccl = filter_by_apn(&dataset, Apn::Ccl);
        let sorted = sort_records(&ccl, "addedOn", SortDirection::Descending).unwrap();
        let page = paginate(&sorted, 0, DEFAULT_PAGE_SIZE);

        assert_eq!(page.len(), DEFAULT_PAGE_SIZE);
        assert!(page[0].added_on >= page[page.len() - 1].added_on);
    }

    #[test]
    fn it_drives_a_report_end_to_end() {
        let dataset = generate_dataset(200);
        let mut state = ReportState::new();
        state.submit_apn_wise(Apn::Internet);

        let view = state.calculate(&dataset).expect("filter was submitted");
        assert_eq!(view.total_rows, 66);
        assert_eq!(view.total_pages, 14);
        let chart_total: usize = view.monthly.iter().map(|m| m.count).sum();
        assert_eq!(chart_total, view.total_rows);
    }
}
