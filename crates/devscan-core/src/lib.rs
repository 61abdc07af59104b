//! Core library for marine device inventory extraction.
//!
//! This crate provides:
//! - Pattern-based extraction of device records (product name, product
//!   code, serial number) from line-oriented OCR text
//! - A heuristic scanner for engine serial blocks
//! - Device-type auto-classification against a fixed catalog
//! - Vessel report export in the technician-facing text format
//!
//! The OCR engine itself is an external collaborator: callers hand over
//! newline-joined recognized text, one block per screenshot.

pub mod error;
pub mod export;
pub mod extract;
pub mod models;

pub use error::{DevscanError, ExportError, Result};
pub use export::{default_filename, render_report, write_report};
pub use extract::{classify, split_product_code, DeviceTextParser, TextParser};
pub use models::{DeviceRecord, DeviceType, DevscanConfig, VesselInfo};
