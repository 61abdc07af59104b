//! Device record models for the extraction pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical device types from the installation catalog.
///
/// The catalog is closed as far as the core is concerned; a UI layer may
/// offer additional manual choices but the classifier only ever assigns
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceType {
    Axiom2Pro9,
    Axiom2Pro12,
    Axiom2Pro16,
    Gmdss,
    Ais700,
    RadarQuantum2,
    ThermalCamera,
    Ray53Vhf,
    Rs150,
    Engine,
}

impl DeviceType {
    /// Catalog label as shown to technicians and written to export files.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Axiom2Pro9 => "AXIOM 2 PRO 9",
            Self::Axiom2Pro12 => "AXIOM 2 PRO 12",
            Self::Axiom2Pro16 => "AXIOM 2 PRO 16",
            Self::Gmdss => "GMDSS",
            Self::Ais700 => "RAYMARINE AIS 700",
            Self::RadarQuantum2 => "RADAR QUANTUM 2",
            Self::ThermalCamera => "THERMAL CAMERA",
            Self::Ray53Vhf => "RAYMARINE RAY53 VHF",
            Self::Rs150 => "RAYMARINE RS 150",
            Self::Engine => "ENGINE",
        }
    }

    /// Whether this type is a chartplotter screen (gets a "GPS" suffix in
    /// export headers).
    pub fn is_axiom(&self) -> bool {
        matches!(self, Self::Axiom2Pro9 | Self::Axiom2Pro12 | Self::Axiom2Pro16)
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One extracted piece of equipment.
///
/// `selected` and `device_type` carry per-record state that a UI layer
/// mutates in place; there are no side tables keyed by row handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Display name with any embedded product code removed. Never empty;
    /// engine-heuristic records use the literal "ENGINE".
    pub product_name: String,

    /// Product code split out of the raw product string, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,

    /// Serial number token. Never empty.
    pub serial: String,

    /// Index of the source image within one aggregation call.
    #[serde(default)]
    pub source_image: usize,

    /// Auto-classified device type; `None` means unresolved and left to a
    /// human decision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,

    /// Whether the record is marked for export.
    #[serde(default)]
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(DeviceType::Axiom2Pro9.label(), "AXIOM 2 PRO 9");
        assert_eq!(DeviceType::Ais700.label(), "RAYMARINE AIS 700");
        assert_eq!(DeviceType::Engine.to_string(), "ENGINE");
    }

    #[test]
    fn test_is_axiom() {
        assert!(DeviceType::Axiom2Pro12.is_axiom());
        assert!(!DeviceType::Gmdss.is_axiom());
    }

    #[test]
    fn test_record_json_roundtrip() {
        let record = DeviceRecord {
            product_name: "AXIOM 2 PRO 9".to_string(),
            product_code: Some("E12345".to_string()),
            serial: "TAZ2ZKB".to_string(),
            source_image: 0,
            device_type: Some(DeviceType::Axiom2Pro9),
            selected: false,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: DeviceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
