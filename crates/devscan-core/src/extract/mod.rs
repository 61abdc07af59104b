//! Device extraction pipeline: tokenization, pattern matching, pairing
//! heuristics, engine-block scanning, dedup and classification.

mod classifier;
mod engine;
mod lines;
mod locator;
mod parser;
pub mod rules;
mod splitter;

pub use classifier::classify;
pub use locator::FieldIndices;
pub use parser::{DeviceTextParser, TextParser};
pub use splitter::split_product_code;

/// A raw (product, serial) pair before code splitting and classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawDevice {
    pub product: String,
    pub serial: String,
}
