//! FILENAME: export/tests/common/mod.rs
//! Fixtures and re-parsing helpers for export round-trip tests.

use engine::{Apn, Package, Record};
use chrono::NaiveDate;

/// A small fixture set: two generated-shape records plus one with every
/// character the serializers must escape.
pub fn sample_records() -> Vec<Record> {
    let mut records = engine::generate_dataset(2);
    records.push(Record {
        mobile_number: "+94770000099".to_string(),
        apn: Apn::Vpn,
        ip_address: "10.0.0.9".to_string(),
        package: Package::Premium,
        added_on: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        added_by: "O'Brien & \"ops\" <night shift>".to_string(),
        charge: 500.0,
        charge_added_on: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        charge_terminated: NaiveDate::from_ymd_opt(2024, 8, 15).unwrap(),
    });
    records
}

/// Parses the Excel-compatible CSV produced by `export_csv` back into rows
/// of plain field values. Understands the BOM prefix, quoted headers, the
/// `="…"` cell wrapper, and doubled quotes.
pub fn parse_csv(content: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split("\r\n");

    let header = lines
        .next()
        .map(|line| split_cells(line).iter().map(|c| unwrap_cell(c)).collect())
        .unwrap_or_default();

    let rows = lines
        .map(|line| split_cells(line).iter().map(|c| unwrap_cell(c)).collect())
        .collect();

    (header, rows)
}

/// Splits one CSV line on commas that sit outside quotes.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => {
                cells.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    cells.push(current);
    cells
}

/// Strips the `="…"` or `"…"` wrapper (one quote each side) and un-doubles
/// interior quotes.
fn unwrap_cell(cell: &str) -> String {
    let inner = cell.strip_prefix('=').unwrap_or(cell);
    let inner = inner.strip_prefix('"').unwrap_or(inner);
    let inner = inner.strip_suffix('"').unwrap_or(inner);
    inner.replace("\"\"", "\"")
}
