//! Separation of embedded product codes from display names.

use super::rules::EMBEDDED_CODE;

/// Split a raw product string into a display name and an optional product
/// code. The first embedded code found is removed from the name (single
/// occurrence) and the remainder trimmed.
pub fn split_product_code(raw: &str) -> (String, Option<String>) {
    match EMBEDDED_CODE.captures(raw) {
        Some(caps) => {
            let code = caps[1].to_string();
            let name = raw.replacen(&code, "", 1).trim().to_string();
            (name, Some(code))
        }
        None => (raw.trim().to_string(), None),
    }
}
