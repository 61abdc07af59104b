//! Extract command - parse OCR text dumps into device records.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use devscan_core::{DeviceRecord, DeviceTextParser};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// OCR text files, one per screenshot, in image order (paths or globs)
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Skip unreadable input files instead of failing the whole batch
    #[arg(long)]
    skip_errors: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    // Expand glob patterns; a non-matching argument is kept as a literal
    // path so the read error below names it.
    let mut files: Vec<PathBuf> = Vec::new();
    for pattern in &args.inputs {
        let matched: Vec<PathBuf> = glob(pattern)?.filter_map(|r| r.ok()).collect();
        if matched.is_empty() {
            files.push(PathBuf::from(pattern));
        } else {
            files.extend(matched);
        }
    }

    println!(
        "{} Reading {} OCR text file(s)",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // One text block per image, in input order. A skipped file drops out
    // of the order entirely; later blocks shift down one image index.
    let mut texts: Vec<String> = Vec::with_capacity(files.len());
    for path in &files {
        match fs::read_to_string(path) {
            Ok(text) => texts.push(text),
            Err(e) if args.skip_errors => {
                warn!("skipping {}: {}", path.display(), e);
            }
            Err(e) => {
                anyhow::bail!("failed to read {}: {}", path.display(), e);
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    if texts.is_empty() {
        anyhow::bail!("no readable input files");
    }

    let parser = DeviceTextParser::new();
    let records = parser.parse_all(&texts);

    debug!("parsed {} records in {:?}", records.len(), start.elapsed());

    let output = format_records(&records, args.format)?;
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    let unresolved = records.iter().filter(|r| r.device_type.is_none()).count();
    println!(
        "{} Extracted {} record(s) from {} image(s), {} unresolved",
        style("✓").green(),
        records.len(),
        texts.len(),
        unresolved
    );

    Ok(())
}

fn format_records(records: &[DeviceRecord], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record([
                "product_name",
                "product_code",
                "serial",
                "source_image",
                "device_type",
            ])?;
            for record in records {
                let source_image = record.source_image.to_string();
                writer.write_record([
                    record.product_name.as_str(),
                    record.product_code.as_deref().unwrap_or(""),
                    record.serial.as_str(),
                    source_image.as_str(),
                    record.device_type.map(|t| t.label()).unwrap_or(""),
                ])?;
            }
            Ok(String::from_utf8(writer.into_inner()?)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for record in records {
                let device_type = record
                    .device_type
                    .map(|t| t.label())
                    .unwrap_or("[unresolved]");
                out.push_str(&format!(
                    "{:<22} {:<10} {:<16} image {}\n",
                    device_type,
                    record.product_code.as_deref().unwrap_or("-"),
                    record.serial,
                    record.source_image
                ));
            }
            Ok(out)
        }
    }
}
