use assert_cmd::Command;
use predicates::prelude::*;

fn devscan() -> Command {
    Command::cargo_bin("devscan").unwrap()
}

#[test]
fn extract_emits_json_records() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("shot1.txt");
    std::fs::write(&input, "AXIOM 2 PRO 9 E12345 TAZ2ZKB\n").unwrap();

    devscan()
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("AXIOM 2 PRO 9"))
        .stdout(predicate::str::contains("TAZ2ZKB"))
        .stdout(predicate::str::contains("E12345"));
}

#[test]
fn extract_fails_on_missing_file() {
    devscan()
        .arg("extract")
        .arg("definitely-not-here.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("definitely-not-here.txt"));
}

#[test]
fn extract_skip_errors_keeps_readable_files() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.txt");
    std::fs::write(&good, "GMDSS V99999\nTAR3WR7\n").unwrap();

    devscan()
        .arg("extract")
        .arg(dir.path().join("missing.txt"))
        .arg(&good)
        .arg("--skip-errors")
        .assert()
        .success()
        .stdout(predicate::str::contains("TAR3WR7"));
}

#[test]
fn extract_then_export_renders_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("shot1.txt");
    std::fs::write(
        &input,
        "AXIOM 2 PRO 9 E12345 TAZ2ZKB\nGMDSS V99999\nTAR3WR7\n",
    )
    .unwrap();

    let records = dir.path().join("records.json");
    devscan()
        .arg("extract")
        .arg(&input)
        .arg("--output")
        .arg(&records)
        .assert()
        .success();

    let report = dir.path().join("report.txt");
    devscan()
        .arg("export")
        .arg(&records)
        .arg("--vessel-model")
        .arg("GT9")
        .arg("--vessel-name")
        .arg("Sea Explorer")
        .arg("--sap")
        .arg("9100967")
        .arg("--output")
        .arg(&report)
        .assert()
        .success();

    let written = std::fs::read_to_string(&report).unwrap();
    assert!(written.starts_with("GT9 - Sea Explorer\n9100967\n"));
    assert!(written.contains("AXIOM 2 PRO 9 GPS:\nE12345\tTAZ2ZKB\n"));
    assert!(written.contains("GMDSS:\nV99999\tTAR3WR7\n"));
}
