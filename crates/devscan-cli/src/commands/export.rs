//! Export command - render the vessel report from extracted records.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::info;

use devscan_core::{default_filename, write_report, DeviceRecord, DevscanConfig, VesselInfo};

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// JSON records file produced by `devscan extract`
    #[arg(required = true)]
    records: PathBuf,

    /// Vessel hull model (e.g. GT9)
    #[arg(long)]
    vessel_model: Option<String>,

    /// Vessel name (e.g. "Sea Explorer")
    #[arg(long)]
    vessel_name: Option<String>,

    /// SAP order number
    #[arg(long)]
    sap: Option<String>,

    /// Output file (default: SN_<sap>.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only export records marked as selected
    #[arg(long)]
    selected_only: bool,
}

pub async fn run(args: ExportArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    // Config supplies vessel defaults; flags win.
    let config = match config_path {
        Some(path) => DevscanConfig::from_file(Path::new(path))?,
        None => DevscanConfig::default(),
    };

    let vessel = VesselInfo {
        model: args.vessel_model.unwrap_or(config.vessel.model),
        name: args.vessel_name.unwrap_or(config.vessel.name),
        sap: args.sap.unwrap_or(config.vessel.sap),
    };

    let content = fs::read_to_string(&args.records)?;
    let mut records: Vec<DeviceRecord> = serde_json::from_str(&content)?;

    if args.selected_only || config.export.selected_only {
        records.retain(|r| r.selected);
    }

    let unresolved = records.iter().filter(|r| r.device_type.is_none()).count();
    if unresolved > 0 {
        eprintln!(
            "{} {} record(s) without a device type will be excluded",
            style("⚠").yellow(),
            unresolved
        );
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(default_filename(&vessel.sap)));

    write_report(&path, &vessel, &records)?;
    info!("report rendered for vessel {}", vessel.name);

    println!(
        "{} Exported {} record(s) to {}",
        style("✓").green(),
        records.len() - unresolved,
        path.display()
    );

    Ok(())
}
