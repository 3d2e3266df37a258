//! FILENAME: export/src/xlsx.rs
//! PURPOSE: XLSX serialization of the report.
//! CONTEXT: Single "APN Report" sheet. Numeric columns are written as
//! numbers so spreadsheets can aggregate them; everything else is a string.
//! Column widths track the longest value per column, capped so one long cell
//! cannot produce a degenerate layout.

use crate::{ExportError, ExportPayload};
use engine::{FieldDescriptor, FieldValue, Record};
use log::debug;
use rust_xlsxwriter::{Color, Format, Workbook};

const SHEET_NAME: &str = "APN Report";

/// Character-width cap, matching the dashboard's table layout.
const MAX_COLUMN_WIDTH: usize = 30;

pub fn export_xlsx(
    records: &[Record],
    fields: &[FieldDescriptor],
) -> Result<ExportPayload, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x0C0B4D))
        .set_font_color(Color::White);

    for (col, field) in fields.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, field.label, &header_format)?;
    }

    for (row, record) in records.iter().enumerate() {
        let row = row as u32 + 1;
        for (col, field) in fields.iter().enumerate() {
            match record.field(field.key) {
                FieldValue::Number(n) => {
                    worksheet.write_number(row, col as u16, n)?;
                }
                value => {
                    worksheet.write_string(row, col as u16, value.to_string())?;
                }
            }
        }
    }

    for (col, field) in fields.iter().enumerate() {
        worksheet.set_column_width(col as u16, column_width(records, field) as f64)?;
    }

    let bytes = workbook.save_to_buffer()?;
    debug!("XLSX export: {} records, {} bytes", records.len(), bytes.len());

    Ok(ExportPayload {
        filename: "apn-report.xlsx",
        content_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        bytes,
    })
}

/// Width in characters: the longest of label and cell values, plus padding,
/// capped at `MAX_COLUMN_WIDTH`.
fn column_width(records: &[Record], field: &FieldDescriptor) -> usize {
    let longest_cell = records
        .iter()
        .map(|record| record.field_text(field.key).chars().count())
        .max()
        .unwrap_or(0);
    (longest_cell.max(field.label.chars().count()) + 2).min(MAX_COLUMN_WIDTH)
}
