//! Token-level pattern rules for product codes and serial numbers.

pub mod patterns;

pub use patterns::{SerialRule, EMBEDDED_CODE, PRODUCT_CODE, SERIAL_RULES};

/// Check whether a token is a standalone product code.
pub fn is_product_code(token: &str) -> bool {
    PRODUCT_CODE.is_match(token)
}

/// Find the first serial rule matching a token. Rules are evaluated in
/// `SERIAL_RULES` order and evaluation stops at the first hit.
///
/// Every known serial shape carries at least one digit; the alphanumeric
/// catch-all rules alone would also swallow plain words ("GMDSS",
/// "ENGINES"), so digit-free tokens are rejected up front.
pub fn match_serial(token: &str) -> Option<&'static SerialRule> {
    if !token.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    SERIAL_RULES.iter().find(|rule| rule.pattern.is_match(token))
}

/// Check whether a token matches any serial rule.
pub fn is_serial(token: &str) -> bool {
    match_serial(token).is_some()
}
