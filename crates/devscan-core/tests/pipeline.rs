//! End-to-end pipeline tests: OCR text in, vessel report out.

use devscan_core::{
    render_report, DeviceTextParser, DeviceType, TextParser, VesselInfo,
};

const SCREENSHOT_ONE: &str = "\
Installed Equipment
AXIOM 2 PRO 9 E12345 TAZ2ZKB
GMDSS V99999
TAR3WR7
RAYMARINE AIS 700 E54321 1240430
";

const SCREENSHOT_TWO: &str = "\
Engines
Port side
Model
6MLN1000296
Model
6MLLN1005392
";

#[test]
fn full_pipeline_two_images() {
    let parser = DeviceTextParser::new();
    let records = parser.parse_all([SCREENSHOT_ONE, SCREENSHOT_TWO]);

    assert_eq!(records.len(), 5);

    assert_eq!(records[0].product_name, "AXIOM 2 PRO 9");
    assert_eq!(records[0].device_type, Some(DeviceType::Axiom2Pro9));
    assert_eq!(records[1].product_name, "GMDSS");
    assert_eq!(records[1].serial, "TAR3WR7");
    assert_eq!(records[2].device_type, Some(DeviceType::Ais700));

    // Engine pass results from the second image
    assert!(records[3..].iter().all(|r| {
        r.product_name == "ENGINE"
            && r.device_type == Some(DeviceType::Engine)
            && r.source_image == 1
    }));

    let vessel = VesselInfo::new("GT9", "Sea Explorer", "9100967");
    let report = render_report(&vessel, &records).unwrap();

    assert_eq!(
        report,
        "GT9 - Sea Explorer\n\
         9100967\n\
         ___________________________________\n\
         \n\
         AXIOM 2 PRO 9 GPS:\n\
         E12345\tTAZ2ZKB\n\
         \n\
         GMDSS:\n\
         V99999\tTAR3WR7\n\
         \n\
         RAYMARINE AIS 700:\n\
         E54321\t1240430\n\
         \n\
         ENGINE (x2):\n\
         6MLN1000296\n\
         6MLLN1005392\n\
         \n"
    );
}

#[test]
fn identical_serials_across_images_are_both_kept() {
    let parser = DeviceTextParser::new();
    let text = "GMDSS V99999\nTAR3WR7";
    let records = parser.parse_all([text, text]);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].serial, records[1].serial);
    assert_ne!(records[0].source_image, records[1].source_image);
}

#[test]
fn parse_text_is_idempotent() {
    let parser = DeviceTextParser::new();
    let first = parser.parse_text(SCREENSHOT_ONE);
    let second = parser.parse_text(SCREENSHOT_ONE);
    assert_eq!(first, second);
}
