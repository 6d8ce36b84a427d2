#![cfg(test)]
use std::fs;

use tempfile::TempDir;

use equipr_core::session::SessionReport;
use equipr_core::writer;

/// A session that reassigns one router and quits. The files must come out
/// as compact JSON, and parse back to the same values.
#[test]
fn a_single_update_session_round_trips() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let updated = dir.path().join("updated.txt");
    let invalid = dir.path().join("invalid.txt");

    let mut report = SessionReport::new();
    report.record_update("r1", "192.168.1.1");

    writer::write_updates(&report, &updated)?;
    writer::write_invalid(&report, &invalid)?;

    let text = fs::read_to_string(&updated)?;
    assert_eq!(text, r#"{"r1":"192.168.1.1"}"#);

    let parsed: serde_json::Value = serde_json::from_str(&text)?;
    assert_eq!(parsed["r1"], "192.168.1.1");

    assert_eq!(fs::read_to_string(&invalid)?, "[]");
    assert_eq!(report.updated_count(), 1);
    assert_eq!(report.invalid_count(), 0);
    Ok(())
}

#[test]
fn an_empty_session_writes_empty_collections() {
    let dir = TempDir::new().unwrap();
    let updated = dir.path().join("updated.txt");
    let invalid = dir.path().join("invalid.txt");

    let report = SessionReport::new();
    writer::write_updates(&report, &updated).unwrap();
    writer::write_invalid(&report, &invalid).unwrap();

    assert_eq!(fs::read_to_string(&updated).unwrap(), "{}");
    assert_eq!(fs::read_to_string(&invalid).unwrap(), "[]");
}

#[test]
fn the_update_set_keeps_insertion_order_and_last_values() {
    let dir = TempDir::new().unwrap();
    let updated = dir.path().join("updated.txt");

    let mut report = SessionReport::new();
    report.record_update("r1", "1.1.1.1");
    report.record_update("s1", "2.2.2.2");
    report.record_update("r1", "3.3.3.3");

    writer::write_updates(&report, &updated).unwrap();

    // r1 keeps its first slot but carries the last address.
    assert_eq!(
        fs::read_to_string(&updated).unwrap(),
        r#"{"r1":"3.3.3.3","s1":"2.2.2.2"}"#
    );
}

#[test]
fn rejected_addresses_serialize_in_order_with_duplicates() {
    let dir = TempDir::new().unwrap();
    let invalid = dir.path().join("invalid.txt");

    let mut report = SessionReport::new();
    report.record_invalid("300.1.1.1");
    report.record_invalid("1.2.3");
    report.record_invalid("300.1.1.1");

    writer::write_invalid(&report, &invalid).unwrap();

    assert_eq!(
        fs::read_to_string(&invalid).unwrap(),
        r#"["300.1.1.1","1.2.3","300.1.1.1"]"#
    );
    assert_eq!(report.invalid_count(), 3);
}

/// One file failing must not take the other down with it.
#[test]
fn write_failures_are_independent() {
    let dir = TempDir::new().unwrap();
    let unwritable = dir.path().join("no-such-dir").join("updated.txt");
    let invalid = dir.path().join("invalid.txt");

    let mut report = SessionReport::new();
    report.record_update("r1", "192.168.1.1");
    report.record_invalid("300.1.1.1");

    assert!(writer::write_updates(&report, &unwritable).is_err());
    writer::write_invalid(&report, &invalid).unwrap();

    assert_eq!(
        fs::read_to_string(&invalid).unwrap(),
        r#"["300.1.1.1"]"#
    );
}
