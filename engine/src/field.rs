//! FILENAME: engine/src/field.rs
//! PURPOSE: Report column descriptors - the single source of truth for the
//! column set, order, and labels.
//! CONTEXT: The table view and every export serializer iterate REPORT_FIELDS
//! rather than hard-coding fields, so all outputs agree on columns.

use crate::error::ReportError;
use serde::{Deserialize, Serialize};

/// Identifies one report column. The serialized form matches the camelCase
/// key used on the wire (e.g. `mobileNumber`) and as XML element tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    MobileNumber,
    Apn,
    IpAddress,
    Package,
    AddedOn,
    AddedBy,
    Charge,
    ChargeAddedOn,
    ChargeTerminated,
}

impl FieldKey {
    /// The camelCase key string for this column.
    pub fn key(&self) -> &'static str {
        match self {
            FieldKey::MobileNumber => "mobileNumber",
            FieldKey::Apn => "apn",
            FieldKey::IpAddress => "ipAddress",
            FieldKey::Package => "package",
            FieldKey::AddedOn => "addedOn",
            FieldKey::AddedBy => "addedBy",
            FieldKey::Charge => "charge",
            FieldKey::ChargeAddedOn => "chargeAddedOn",
            FieldKey::ChargeTerminated => "chargeTerminated",
        }
    }

    /// Resolves a key string against the descriptor list.
    /// Unknown keys are a caller error, not a silent no-op.
    pub fn parse(key: &str) -> Result<FieldKey, ReportError> {
        REPORT_FIELDS
            .iter()
            .find(|descriptor| descriptor.key.key() == key)
            .map(|descriptor| descriptor.key)
            .ok_or_else(|| ReportError::InvalidField(key.to_string()))
    }
}

/// One report column: key, display label, and whether values compare and
/// align numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: FieldKey,
    pub label: &'static str,
    pub numeric: bool,
}

/// The canonical column list, in display order.
pub const REPORT_FIELDS: [FieldDescriptor; 9] = [
    FieldDescriptor { key: FieldKey::MobileNumber, label: "Mobile Number", numeric: false },
    FieldDescriptor { key: FieldKey::Apn, label: "APN", numeric: false },
    FieldDescriptor { key: FieldKey::IpAddress, label: "IP Address", numeric: false },
    FieldDescriptor { key: FieldKey::Package, label: "Package", numeric: false },
    FieldDescriptor { key: FieldKey::AddedOn, label: "Added On", numeric: false },
    FieldDescriptor { key: FieldKey::AddedBy, label: "Added By", numeric: false },
    FieldDescriptor { key: FieldKey::Charge, label: "Charge (Rs.)", numeric: true },
    FieldDescriptor { key: FieldKey::ChargeAddedOn, label: "Charge Added On", numeric: false },
    FieldDescriptor { key: FieldKey::ChargeTerminated, label: "Charge Terminated", numeric: false },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        for descriptor in &REPORT_FIELDS {
            let parsed = FieldKey::parse(descriptor.key.key());
            assert_eq!(parsed, Ok(descriptor.key));
        }
    }

    #[test]
    fn test_parse_unknown_key() {
        let result = FieldKey::parse("billingCycle");
        assert_eq!(
            result,
            Err(ReportError::InvalidField("billingCycle".to_string()))
        );
    }

    #[test]
    fn test_descriptor_order_and_labels() {
        let labels: Vec<&str> = REPORT_FIELDS.iter().map(|d| d.label).collect();
        assert_eq!(
            labels,
            vec![
                "Mobile Number",
                "APN",
                "IP Address",
                "Package",
                "Added On",
                "Added By",
                "Charge (Rs.)",
                "Charge Added On",
                "Charge Terminated",
            ]
        );
    }

    #[test]
    fn test_charge_is_the_only_numeric_column() {
        let numeric: Vec<FieldKey> = REPORT_FIELDS
            .iter()
            .filter(|d| d.numeric)
            .map(|d| d.key)
            .collect();
        assert_eq!(numeric, vec![FieldKey::Charge]);
    }
}
