//! Vessel identification for export headers.

use serde::{Deserialize, Serialize};

/// Vessel details written at the top of an export file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VesselInfo {
    /// Hull model, e.g. "GT9" or "ALPHA 45".
    pub model: String,

    /// Vessel name, e.g. "Sea Explorer".
    pub name: String,

    /// SAP order number, e.g. "9100967". Also drives the default export
    /// file name.
    pub sap: String,
}

impl VesselInfo {
    pub fn new(
        model: impl Into<String>,
        name: impl Into<String>,
        sap: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            name: name.into(),
            sap: sap.into(),
        }
    }

    /// Field value for the export header, with blanks rendered as "N/A".
    pub(crate) fn field_or_na(value: &str) -> &str {
        if value.trim().is_empty() {
            "N/A"
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_or_na() {
        assert_eq!(VesselInfo::field_or_na("GT9"), "GT9");
        assert_eq!(VesselInfo::field_or_na("  "), "N/A");
        assert_eq!(VesselInfo::field_or_na(""), "N/A");
    }
}
