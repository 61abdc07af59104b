//! Heuristic scanner for engine serial blocks.
//!
//! Engine pages rarely carry product codes, so the line-level extractor
//! misses them. Instead, an "engine"/"engines" keyword opens a bounded
//! lookahead window that is scanned for model/serial markers.

use tracing::debug;

use super::rules;
use super::RawDevice;

/// Number of lines scanned after an engine keyword line.
const LOOKAHEAD: usize = 5;

/// Scan all lines for engine blocks. Runs independently of the line-level
/// extraction pass; results are unioned by the caller.
pub(crate) fn scan_engine_blocks(lines: &[&str]) -> Vec<RawDevice> {
    let mut found = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() || !contains_ignore_case(line, "engine") {
            continue;
        }

        let window_end = (i + 1 + LOOKAHEAD).min(lines.len());
        for j in (i + 1)..window_end {
            let scanned = lines[j].trim();

            // A "model" marker pairs with a serial on the very next line.
            if contains_ignore_case(scanned, "model") {
                if let Some(next) = lines.get(j + 1) {
                    let candidate = next.trim();
                    if rules::is_serial(candidate) {
                        debug!(serial = candidate, "engine serial via model marker");
                        found.push(RawDevice {
                            product: "ENGINE".to_string(),
                            serial: candidate.to_string(),
                        });
                    }
                }
            }

            // A "serial" marker line that is itself a bare serial token.
            if contains_ignore_case(scanned, "serial") && rules::is_serial(scanned) {
                debug!(serial = scanned, "engine serial via serial marker");
                found.push(RawDevice {
                    product: "ENGINE".to_string(),
                    serial: scanned.to_string(),
                });
            }
        }
    }

    found
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(needle)
}
