//! FILENAME: engine/src/report.rs
//! PURPOSE: The caller-side report state container and the view it produces.
//! CONTEXT: The pure operations (filter/sort/paginate/aggregate) own no
//! state; everything the dashboard tracks between interactions lives here.
//! `ReportState` is the serializable configuration, `calculate` turns it plus
//! a dataset into a `ReportView` ready for rendering.

use crate::date::DateRange;
use crate::error::ReportError;
use crate::field::FieldKey;
use crate::filter::{filter_by_account, filter_by_apn, filter_by_date_range};
use crate::monthly::{aggregate_by_month, MonthlyCount};
use crate::paginate::{paginate, total_pages};
use crate::record::{Apn, Record};
use crate::sort::{sort_by_field, SortDirection};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Rows-per-page default and the options the dashboard offers.
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

// ============================================================================
// FILTER CRITERIA
// ============================================================================

/// The submitted filter criteria. `None` on the state means "nothing
/// submitted yet", which is distinct from a submitted filter matching zero
/// records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ReportFilter {
    ApnWise { apn: Apn },
    DateWise { apn: Apn, range: DateRange },
    AccountWise { mobile_number: String },
}

// ============================================================================
// REPORT STATE
// ============================================================================

/// Everything the dashboard tracks between interactions: the submitted
/// filter, sort key and direction, pagination cursor, and the selection set
/// (keyed by mobile number).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportState {
    pub filter: Option<ReportFilter>,
    pub sort_field: FieldKey,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
    pub selected: HashSet<String>,
}

impl Default for ReportState {
    fn default() -> Self {
        ReportState {
            filter: None,
            sort_field: FieldKey::MobileNumber,
            sort_direction: SortDirection::Ascending,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            selected: HashSet::new(),
        }
    }
}

impl ReportState {
    pub fn new() -> Self {
        ReportState::default()
    }

    // ------------------------------------------------------------------
    // Filter submission
    // ------------------------------------------------------------------

    pub fn submit_apn_wise(&mut self, apn: Apn) {
        self.apply_filter(ReportFilter::ApnWise { apn });
    }

    /// Parses and validates the range before accepting the filter; an
    /// invalid range leaves the previous state untouched.
    pub fn submit_date_wise(&mut self, apn: Apn, from: &str, to: &str) -> Result<(), ReportError> {
        let range = DateRange::parse(from, to)?;
        self.apply_filter(ReportFilter::DateWise { apn, range });
        Ok(())
    }

    pub fn submit_account_wise(&mut self, mobile_number: impl Into<String>) {
        self.apply_filter(ReportFilter::AccountWise {
            mobile_number: mobile_number.into(),
        });
    }

    fn apply_filter(&mut self, filter: ReportFilter) {
        self.filter = Some(filter);
        self.page = 0;
        self.selected.clear();
    }

    /// Back to the form: clears the filter, cursor, and selection. The sort
    /// preference survives.
    pub fn reset(&mut self) {
        self.filter = None;
        self.page = 0;
        self.selected.clear();
    }

    // ------------------------------------------------------------------
    // Sorting and paging
    // ------------------------------------------------------------------

    /// Column-header click: toggles direction on the active column,
    /// otherwise switches to the new column ascending.
    pub fn request_sort(&mut self, key: &str) -> Result<(), ReportError> {
        let field = FieldKey::parse(key)?;
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
        Ok(())
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changing the page size resets the cursor, so a shrunken result can
    /// never leave the table stuck on an out-of-range page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 0;
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn toggle_selected(&mut self, mobile_number: &str) {
        if !self.selected.remove(mobile_number) {
            self.selected.insert(mobile_number.to_string());
        }
    }

    pub fn select_all(&mut self, records: &[Record]) {
        self.selected = records
            .iter()
            .map(|record| record.mobile_number.clone())
            .collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, mobile_number: &str) -> bool {
        self.selected.contains(mobile_number)
    }

    // ------------------------------------------------------------------
    // Calculation
    // ------------------------------------------------------------------

    /// The filtered (unsorted, unpaginated) record set, or `None` while no
    /// filter has been submitted.
    pub fn filtered(&self, dataset: &[Record]) -> Option<Vec<Record>> {
        match self.filter.as_ref()? {
            ReportFilter::ApnWise { apn } => Some(filter_by_apn(dataset, *apn)),
            ReportFilter::DateWise { apn, range } => {
                Some(filter_by_date_range(dataset, *apn, range))
            }
            ReportFilter::AccountWise { mobile_number } => {
                Some(filter_by_account(dataset, mobile_number))
            }
        }
    }

    /// Filter, sort, and paginate the dataset into a renderable view.
    /// `None` while no filter has been submitted.
    pub fn calculate(&self, dataset: &[Record]) -> Option<ReportView> {
        let filtered = self.filtered(dataset)?;
        let sorted = sort_by_field(&filtered, self.sort_field, self.sort_direction);
        let pages = total_pages(sorted.len(), self.page_size);
        let rows = paginate(&sorted, self.page, self.page_size).to_vec();
        let monthly = aggregate_by_month(&filtered);

        Some(ReportView {
            rows,
            total_rows: sorted.len(),
            total_pages: pages,
            page: self.page,
            monthly,
        })
    }
}

// ============================================================================
// REPORT VIEW
// ============================================================================

/// One page of the report, ready for rendering, plus the monthly series for
/// the chart collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub rows: Vec<Record>,
    pub total_rows: usize,
    pub total_pages: usize,
    pub page: usize,
    pub monthly: Vec<MonthlyCount>,
}
