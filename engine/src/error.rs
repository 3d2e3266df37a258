//! FILENAME: engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Unknown report field: {0}")]
    InvalidField(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),
}
