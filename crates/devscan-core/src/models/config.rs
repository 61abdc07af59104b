//! Configuration structures for the devscan tools.

use serde::{Deserialize, Serialize};

use super::vessel::VesselInfo;

/// Main configuration, typically loaded from a JSON file so repeated
/// exports for the same build slot don't need the vessel details retyped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DevscanConfig {
    /// Default vessel details for export headers.
    pub vessel: VesselInfo,

    /// Export behavior.
    pub export: ExportConfig,
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Only export records marked as selected.
    pub selected_only: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            selected_only: false,
        }
    }
}

impl DevscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devscan.json");

        let mut config = DevscanConfig::default();
        config.vessel = VesselInfo::new("GT9", "Sea Explorer", "9100967");
        config.save(&path).unwrap();

        let loaded = DevscanConfig::from_file(&path).unwrap();
        assert_eq!(loaded.vessel.model, "GT9");
        assert!(!loaded.export.selected_only);
    }

    #[test]
    fn test_config_defaults_for_missing_fields() {
        let config: DevscanConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.vessel.model, "");
    }
}
