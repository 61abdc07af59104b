//! Keyword-based device type classification.

use crate::models::DeviceType;

type Predicate = fn(&str) -> bool;

/// Ordered classification rules, first match wins. Each predicate receives
/// the uppercased product name.
const RULES: &[(Predicate, DeviceType)] = &[
    (
        |n| n.contains("AXIOM") && n.contains('9'),
        DeviceType::Axiom2Pro9,
    ),
    (
        |n| n.contains("AXIOM") && n.contains("12"),
        DeviceType::Axiom2Pro12,
    ),
    (
        |n| n.contains("AXIOM") && n.contains("16"),
        DeviceType::Axiom2Pro16,
    ),
    // "12L" catches GMDSS units identified only by their product code
    (
        |n| n.contains("GMDSS") || n.contains("12L"),
        DeviceType::Gmdss,
    ),
    (
        |n| n.contains("AIS") && n.contains("700"),
        DeviceType::Ais700,
    ),
    (
        |n| n.contains("QUANTUM") || (n.contains("RADAR") && n.contains('2')),
        DeviceType::RadarQuantum2,
    ),
    (
        |n| n.contains("THERMAL") || n.contains("CAMERA"),
        DeviceType::ThermalCamera,
    ),
    (
        |n| n.contains("RAY53") || (n.contains("VHF") && n.contains("53")),
        DeviceType::Ray53Vhf,
    ),
    (
        |n| n.contains("RS") && n.contains("150"),
        DeviceType::Rs150,
    ),
    (|n| n.contains("ENGINE"), DeviceType::Engine),
];

/// Map a product name to a canonical device type. Names outside the rule
/// set yield `None`, deferring the choice to a human.
pub fn classify(product_name: &str) -> Option<DeviceType> {
    let upper = product_name.to_uppercase();
    RULES
        .iter()
        .find(|(predicate, _)| predicate(&upper))
        .map(|(_, device_type)| *device_type)
}
