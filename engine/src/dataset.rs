//! FILENAME: engine/src/dataset.rs
//! PURPOSE: Deterministic synthetic dataset generation.
//! CONTEXT: There is no backing data source - the dashboard runs on records
//! produced by a fixed formula, so every run (and every test) sees the same
//! data. Record `i` cycles package and APN together through index `i % 3`.

use crate::record::{Apn, Package, Record};
use chrono::{Days, Months, NaiveDate};

/// Generates `count` synthetic report records. Record `i` lands `i` days
/// after 2024-01-01.
pub fn generate_dataset(count: usize) -> Vec<Record> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid calendar date");

    let mut data = Vec::with_capacity(count);
    for i in 1..=count {
        let package = Package::ALL[i % Package::ALL.len()];
        let apn = Apn::ALL[i % Apn::ALL.len()];

        let added_on = start + Days::new(i as u64);
        // Two months on, day clamped to the target month's length, so the
        // termination date never precedes the charge date.
        let charge_terminated = added_on
            .checked_add_months(Months::new(2))
            .expect("date within calendar range");

        data.push(Record {
            mobile_number: format!("+9477{:07}", (1_000_000 + i) % 10_000_000),
            apn,
            ip_address: format!("192.168.{}.{}", i / 255, i % 255),
            package,
            added_on,
            added_by: "Admin".to_string(),
            charge: package.monthly_charge(),
            charge_added_on: added_on,
            charge_terminated,
        });
    }
    data
}
