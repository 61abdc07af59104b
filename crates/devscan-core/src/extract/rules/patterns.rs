//! Regex patterns for product codes and serial numbers.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Product code as a standalone token (E12345, V99999, MS-ABC12, 12L4444)
    pub static ref PRODUCT_CODE: Regex = Regex::new(
        r"^(E\d{5}|V\d{5}|MS-[A-Z0-9]+|\d{1,3}L\d{4})$"
    ).unwrap();

    // Product code embedded inside a longer product string
    pub static ref EMBEDDED_CODE: Regex = Regex::new(
        r"\b([EV]\d{5}|MS-[A-Z0-9]+|\d{1,3}L\d{4})\b"
    ).unwrap();
}

/// A named serial-number matcher applied to a single token.
pub struct SerialRule {
    /// Rule identifier, used in trace output.
    pub name: &'static str,
    pub pattern: Regex,
}

impl SerialRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
        }
    }
}

lazy_static! {
    /// Ordered serial rule set, broadest catch-alls last. Evaluation order
    /// matters: several rules overlap and matching stops at the first hit
    /// per token. Do not reorder.
    pub static ref SERIAL_RULES: Vec<SerialRule> = vec![
        // TAZ2ZKB, TAR3WR7, TADG0G9
        SerialRule::new("raymarine-alpha", r"^[A-Z]{3}\d[A-Z0-9]{3}$"),
        // 1240430, 0330729, 10962030599
        SerialRule::new("numeric-7-12", r"^\d{7,12}$"),
        // J497793-0051
        SerialRule::new("hyphenated-jc", r"^[JC]\d{6}-\d{4}$"),
        // E704760350080
        SerialRule::new("e-numeric-long", r"^E\d{10,}$"),
        // Yamaha 6MLN1000296, Mercury 1E100979
        SerialRule::new("outboard-7-10", r"^[A-Z]{1,2}\d{7,10}$"),
        // 3B417994, 3B424456
        SerialRule::new("alnum-8-12", r"^[A-Z0-9]{8,12}$"),
        // Volvo A1230833
        SerialRule::new("volvo-6-8", r"^[A-Z]{1,2}\d{6,8}$"),
        SerialRule::new("numeric-8-10", r"^\d{8,10}$"),
        // 6MLLN1005392, 6KNN1005289
        SerialRule::new("prefixed-6-12", r"^[A-Z]{1,2}\d{6,12}$"),
        // 3B553644, 3B563885
        SerialRule::new("alnum-6-14", r"^[A-Z0-9]{6,14}$"),
        // 1E103027, 1E102818
        SerialRule::new("alnum-8-15", r"^[A-Z0-9]{8,15}$"),
        // OCR sometimes reads Latin letters as visually identical Greek
        // capitals (13500033Α, 3Β535504)
        SerialRule::new("alnum-greek-8-15", r"^[A-Z0-9\x{0391}-\x{03A9}]{8,15}$"),
        // D6-440A-G, 8LV370Z, XF450NSA
        SerialRule::new("alnum-hyphen-6-16", r"^[A-Z0-9\-]{6,16}$"),
        // Short Yanmar serials: 6467, 6725
        SerialRule::new("alnum-4-8", r"^[A-Z0-9]{4,8}$"),
    ];
}
