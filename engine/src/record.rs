//! FILENAME: engine/src/record.rs
//! PURPOSE: The report row model and typed per-field access.
//! CONTEXT: Records serialize with camelCase field names so the wire shape
//! matches the dashboard's JSON. `Record::field` is the one place that maps
//! a column key to a value; sorting and every exporter go through it.

use crate::field::FieldKey;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CATEGORICAL FIELDS
// ============================================================================

/// Access Point Name - the categorical filter value of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Apn {
    Internet,
    Ccl,
    Vpn,
}

impl Apn {
    /// All APN values, in the order the dashboard offers them.
    pub const ALL: [Apn; 3] = [Apn::Internet, Apn::Ccl, Apn::Vpn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Apn::Internet => "INTERNET",
            Apn::Ccl => "CCL",
            Apn::Vpn => "VPN",
        }
    }
}

impl fmt::Display for Apn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subscription package tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Package {
    Basic,
    Standard,
    Premium,
}

impl Package {
    pub const ALL: [Package; 3] = [Package::Basic, Package::Standard, Package::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Package::Basic => "Basic",
            Package::Standard => "Standard",
            Package::Premium => "Premium",
        }
    }

    /// Monthly charge in rupees for this tier.
    pub fn monthly_charge(&self) -> f64 {
        match self {
            Package::Basic => 250.0,
            Package::Standard => 300.0,
            Package::Premium => 500.0,
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// One row of the report dataset. `mobile_number` acts as the de-facto
/// unique identifier for selection, but uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub mobile_number: String,
    pub apn: Apn,
    pub ip_address: String,
    pub package: Package,
    pub added_on: NaiveDate,
    pub added_by: String,
    /// Non-negative amount in rupees.
    pub charge: f64,
    pub charge_added_on: NaiveDate,
    /// Always on or after `charge_added_on`.
    pub charge_terminated: NaiveDate,
}

impl Record {
    /// Typed access to one column of this record.
    pub fn field(&self, key: FieldKey) -> FieldValue<'_> {
        match key {
            FieldKey::MobileNumber => FieldValue::Text(&self.mobile_number),
            FieldKey::Apn => FieldValue::Text(self.apn.as_str()),
            FieldKey::IpAddress => FieldValue::Text(&self.ip_address),
            FieldKey::Package => FieldValue::Text(self.package.as_str()),
            FieldKey::AddedOn => FieldValue::Date(self.added_on),
            FieldKey::AddedBy => FieldValue::Text(&self.added_by),
            FieldKey::Charge => FieldValue::Number(self.charge),
            FieldKey::ChargeAddedOn => FieldValue::Date(self.charge_added_on),
            FieldKey::ChargeTerminated => FieldValue::Date(self.charge_terminated),
        }
    }

    /// The display text for one column, as shown in the table and emitted by
    /// every exporter.
    pub fn field_text(&self, key: FieldKey) -> String {
        self.field(key).to_string()
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A single cell value, typed for comparison and rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => {
                // Whole amounts render without a decimal point
                if n.fract() == 0.0 {
                    write!(f, "{:.0}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            mobile_number: "+94771000001".to_string(),
            apn: Apn::Ccl,
            ip_address: "192.168.0.1".to_string(),
            package: Package::Standard,
            added_on: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            added_by: "Admin".to_string(),
            charge: 300.0,
            charge_added_on: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            charge_terminated: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        }
    }

    #[test]
    fn test_field_access() {
        let record = sample_record();
        assert_eq!(record.field(FieldKey::Apn), FieldValue::Text("CCL"));
        assert_eq!(record.field(FieldKey::Charge), FieldValue::Number(300.0));
        assert_eq!(
            record.field(FieldKey::AddedOn),
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        );
    }

    #[test]
    fn test_field_text_rendering() {
        let record = sample_record();
        assert_eq!(record.field_text(FieldKey::MobileNumber), "+94771000001");
        assert_eq!(record.field_text(FieldKey::AddedOn), "2024-01-02");
        // Whole charges render as integers
        assert_eq!(record.field_text(FieldKey::Charge), "300");
    }

    #[test]
    fn test_fractional_charge_rendering() {
        let mut record = sample_record();
        record.charge = 299.5;
        assert_eq!(record.field_text(FieldKey::Charge), "299.5");
    }

    #[test]
    fn test_serde_wire_shape() {
        let record = sample_record();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["mobileNumber"], "+94771000001");
        assert_eq!(json["apn"], "CCL");
        assert_eq!(json["package"], "Standard");
        assert_eq!(json["addedOn"], "2024-01-02");
        assert_eq!(json["chargeTerminated"], "2024-03-02");

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
