//! Device text parsing pipeline.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::models::DeviceRecord;

use super::classifier::classify;
use super::engine::scan_engine_blocks;
use super::lines::{split_lines, tokenize};
use super::locator::locate;
use super::rules;
use super::splitter::split_product_code;
use super::RawDevice;

/// Trait for device text parsing.
pub trait TextParser {
    /// Parse one image's OCR text into device records.
    fn parse_text(&self, text: &str) -> Vec<DeviceRecord>;
}

/// Parser for OCR text recovered from equipment-list screenshots.
///
/// Stateless apart from the pattern library constants; concurrent calls
/// need no locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceTextParser;

impl DeviceTextParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse an ordered list of per-image text blocks. Results are
    /// concatenated in block order with `source_image` set; duplicates are
    /// collapsed within each block only, never across blocks.
    pub fn parse_all<S: AsRef<str>>(
        &self,
        texts: impl IntoIterator<Item = S>,
    ) -> Vec<DeviceRecord> {
        texts
            .into_iter()
            .enumerate()
            .flat_map(|(index, text)| self.parse_block(text.as_ref(), index))
            .collect()
    }

    fn parse_block(&self, text: &str, source_image: usize) -> Vec<DeviceRecord> {
        info!(
            "parsing {} characters of OCR text (image {})",
            text.len(),
            source_image
        );

        let lines = split_lines(text);

        let mut raw = self.scan_lines(&lines);
        raw.extend(scan_engine_blocks(&lines));

        let records: Vec<DeviceRecord> = dedup(raw)
            .into_iter()
            .map(|device| {
                let (name, code) = split_product_code(&device.product);
                // A product that is nothing but a code keeps it as the
                // display name too, so the name is never empty.
                let name = if name.is_empty() { device.product } else { name };
                let device_type = classify(&name);
                DeviceRecord {
                    product_name: name,
                    product_code: code,
                    serial: device.serial,
                    source_image,
                    device_type,
                    selected: false,
                }
            })
            .collect();

        debug!("extracted {} records from image {}", records.len(), source_image);
        records
    }

    /// Line-level pass: pair a product code with a serial on the same line,
    /// or fall back to the immediately following line.
    fn scan_lines(&self, lines: &[&str]) -> Vec<RawDevice> {
        let mut found = Vec::new();

        for (i, raw_line) in lines.iter().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let tokens = tokenize(line);
            if tokens.len() < 2 {
                continue;
            }

            let indices = locate(&tokens);
            match (indices.code, indices.serial) {
                // Same-line pairing: the serial must come after the code.
                (Some(code_idx), Some(serial_idx)) if serial_idx > code_idx => {
                    found.push(RawDevice {
                        product: tokens[..serial_idx].join(" "),
                        serial: tokens[serial_idx].to_string(),
                    });
                }
                // Code without a serial: check the next line.
                (Some(code_idx), None) => {
                    if let Some(next) = lines.get(i + 1) {
                        for token in tokenize(next.trim()) {
                            if rules::is_serial(token) {
                                found.push(RawDevice {
                                    product: tokens[..=code_idx].join(" "),
                                    serial: token.to_string(),
                                });
                            }
                        }
                    }
                }
                // Serial not after the code, or no code at all: no record.
                _ => {}
            }
        }

        found
    }
}

impl TextParser for DeviceTextParser {
    fn parse_text(&self, text: &str) -> Vec<DeviceRecord> {
        self.parse_block(text, 0)
    }
}

/// Collapse duplicate (product, serial) pairs, keeping the first occurrence
/// in order.
fn dedup(devices: Vec<RawDevice>) -> Vec<RawDevice> {
    let mut seen = HashSet::new();
    devices
        .into_iter()
        .filter(|device| seen.insert((device.product.clone(), device.serial.clone())))
        .collect()
}
