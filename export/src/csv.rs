//! FILENAME: export/src/csv.rs
//! PURPOSE: Excel-compatible CSV serialization.
//! CONTEXT: Spreadsheet applications reinterpret bare values - a leading `+`
//! becomes a formula, long digit runs collapse to scientific notation - so
//! every data cell is emitted as the text formula `="value"`. The payload is
//! BOM-prefixed and CRLF-joined for the same reason.

use crate::{ExportError, ExportPayload};
use engine::{FieldDescriptor, Record};
use log::debug;

const UTF8_BOM: &str = "\u{feff}";

pub fn export_csv(
    records: &[Record],
    fields: &[FieldDescriptor],
) -> Result<ExportPayload, ExportError> {
    let header = fields
        .iter()
        .map(|field| quoted(field.label))
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(header);

    for record in records {
        let row = fields
            .iter()
            .map(|field| formula_escaped(&record.field_text(field.key)))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    let content = format!("{}{}", UTF8_BOM, lines.join("\r\n"));
    debug!("CSV export: {} records, {} bytes", records.len(), content.len());

    Ok(ExportPayload {
        filename: "apn-report.csv",
        content_type: "text/csv;charset=utf-8",
        bytes: content.into_bytes(),
    })
}

/// A quoted CSV field with embedded quotes doubled.
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// A quoted field wrapped in `=` so spreadsheets keep it as literal text.
fn formula_escaped(value: &str) -> String {
    format!("={}", quoted(value))
}
