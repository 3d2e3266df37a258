//! FILENAME: export/src/lib.rs
//! PURPOSE: Report export serializers - CSV, XML, XLSX, and PDF.
//! CONTEXT: Every serializer consumes `(records, field descriptors)` and
//! returns an in-memory payload plus suggested filename; saving or
//! downloading the payload is the platform's job. All four iterate the
//! descriptor list, so column set, order, and labels always match the table.

mod csv;
mod error;
mod pdf;
mod xlsx;
mod xml;

pub use csv::export_csv;
pub use error::ExportError;
pub use pdf::export_pdf;
pub use xlsx::export_xlsx;
pub use xml::export_xml;

use engine::{FieldDescriptor, Record};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// EXPORT PAYLOAD
// ============================================================================

/// A rendered export: the bytes, the filename to suggest, and the MIME type
/// for the download collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportPayload {
    /// Convenience for callers that save to disk: writes the payload under
    /// `dir` using the suggested filename and returns the full path.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(self.filename);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

// ============================================================================
// FORMAT DISPATCH
// ============================================================================

/// The four export formats the report offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Xml,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Csv,
        ExportFormat::Xml,
        ExportFormat::Xlsx,
        ExportFormat::Pdf,
    ];

    /// Short label for user-facing messages ("Export to PDF failed").
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Xml => "XML",
            ExportFormat::Xlsx => "XLSX",
            ExportFormat::Pdf => "PDF",
        }
    }
}

/// Renders `records` in the given format. Failures propagate to the caller;
/// nothing is logged-and-swallowed.
pub fn export(
    format: ExportFormat,
    records: &[Record],
    fields: &[FieldDescriptor],
) -> Result<ExportPayload, ExportError> {
    match format {
        ExportFormat::Csv => export_csv(records, fields),
        ExportFormat::Xml => export_xml(records, fields),
        ExportFormat::Xlsx => export_xlsx(records, fields),
        ExportFormat::Pdf => export_pdf(records, fields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{generate_dataset, REPORT_FIELDS};

    #[test]
    fn test_every_format_produces_a_payload() {
        let records = generate_dataset(10);
        for format in ExportFormat::ALL {
            let payload = export(format, &records, &REPORT_FIELDS).unwrap();
            assert!(!payload.bytes.is_empty(), "{} was empty", format.label());
            assert!(payload.filename.starts_with("apn-report."));
        }
    }

    #[test]
    fn test_format_labels() {
        let labels: Vec<&str> = ExportFormat::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["CSV", "XML", "XLSX", "PDF"]);
    }
}
