//! Vessel report export.
//!
//! Renders the technician-facing text file: vessel header, then records
//! grouped by device type in first-seen order. The format is an external
//! contract consumed downstream; change it only deliberately.

use std::fs;
use std::path::Path;

use chrono::Local;
use tracing::info;

use crate::error::{ExportError, Result};
use crate::models::{DeviceRecord, DeviceType, VesselInfo};

const DIVIDER: &str = "___________________________________";

/// Render the export file contents.
///
/// Records without a resolved device type are excluded. Every group ends
/// with a blank line; AXIOM screens get a " GPS" suffix and groups with
/// more than one member a " (xN)" count.
pub fn render_report(
    vessel: &VesselInfo,
    records: &[DeviceRecord],
) -> std::result::Result<String, ExportError> {
    // Group by device type, preserving first-seen type order.
    let mut groups: Vec<(DeviceType, Vec<&DeviceRecord>)> = Vec::new();
    for record in records {
        let Some(device_type) = record.device_type else {
            continue;
        };
        match groups.iter_mut().find(|(t, _)| *t == device_type) {
            Some((_, members)) => members.push(record),
            None => groups.push((device_type, vec![record])),
        }
    }

    if groups.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{} - {}\n",
        VesselInfo::field_or_na(&vessel.model),
        VesselInfo::field_or_na(&vessel.name)
    ));
    out.push_str(&format!("{}\n", VesselInfo::field_or_na(&vessel.sap)));
    out.push_str(DIVIDER);
    out.push_str("\n\n");

    for (device_type, members) in &groups {
        let mut header = device_type.label().to_string();
        if device_type.is_axiom() {
            header.push_str(" GPS");
        }
        if members.len() > 1 {
            header.push_str(&format!(" (x{})", members.len()));
        }
        out.push_str(&header);
        out.push_str(":\n");

        for record in members {
            match record.product_code.as_deref() {
                Some(code) if !code.is_empty() => {
                    out.push_str(&format!("{}\t{}\n", code, record.serial));
                }
                _ => {
                    out.push_str(&record.serial);
                    out.push('\n');
                }
            }
        }

        out.push('\n');
    }

    Ok(out)
}

/// Render and write the export file.
pub fn write_report(
    path: impl AsRef<Path>,
    vessel: &VesselInfo,
    records: &[DeviceRecord],
) -> Result<()> {
    let content = render_report(vessel, records)?;
    fs::write(path.as_ref(), content)?;
    info!("exported {} records to {}", records.len(), path.as_ref().display());
    Ok(())
}

/// Default export file name: `SN_<sap>.txt`, or a timestamped
/// `SN_NoSAP_...` name when no SAP number is set.
pub fn default_filename(sap: &str) -> String {
    let sap = sap.trim();
    if sap.is_empty() {
        format!("SN_NoSAP_{}.txt", Local::now().format("%Y%m%d_%H%M%S"))
    } else {
        format!("SN_{}.txt", sap)
    }
}
