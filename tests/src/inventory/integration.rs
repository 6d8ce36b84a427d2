#![cfg(test)]
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use equipr_common::inventory::device::DeviceKind;
use equipr_core::loader::{self, LoadError};

fn write_pair(dir: &TempDir, routers: &str, switches: &str) -> (PathBuf, PathBuf) {
    let r = dir.path().join("equip_r.txt");
    let s = dir.path().join("equip_s.txt");
    fs::write(&r, routers).unwrap();
    fs::write(&s, switches).unwrap();
    (r, s)
}

/// The loader must reproduce exactly the entries in the files, values
/// untouched, routers ahead of switches, each namespace in file order.
#[test]
fn loads_both_files_in_order_with_kinds() {
    let dir = TempDir::new().unwrap();
    let (r, s) = write_pair(
        &dir,
        r#"{"zeta": "10.0.0.1", "alpha": "10.0.0.2"}"#,
        r#"{"mid": "10.0.0.3"}"#,
    );

    let inventory = loader::load_inventory(&r, &s).unwrap();
    let entries: Vec<(&str, &str, DeviceKind)> = inventory
        .iter()
        .map(|d| (d.name.as_str(), d.address.as_str(), d.kind))
        .collect();

    // "zeta" before "alpha": file order wins over any alphabetical order.
    assert_eq!(
        entries,
        [
            ("zeta", "10.0.0.1", DeviceKind::Router),
            ("alpha", "10.0.0.2", DeviceKind::Router),
            ("mid", "10.0.0.3", DeviceKind::Switch),
        ]
    );
}

#[test]
fn shared_names_across_namespaces_are_kept() {
    let dir = TempDir::new().unwrap();
    let (r, s) = write_pair(
        &dir,
        r#"{"core": "10.0.0.1"}"#,
        r#"{"core": "10.0.0.2"}"#,
    );

    let inventory = loader::load_inventory(&r, &s).unwrap();
    assert_eq!(inventory.len(), 2);
    assert_eq!(inventory.find("core").unwrap().kind, DeviceKind::Router);
}

#[test]
fn a_missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let (r, _) = write_pair(&dir, "{}", "{}");
    let missing = dir.path().join("nope.txt");

    let err = loader::load_inventory(&r, &missing).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }), "got {err:?}");
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let (r, s) = write_pair(&dir, r#"{"r1": "10.0.0.1""#, "{}");

    let err = loader::load_inventory(&r, &s).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }), "got {err:?}");
}

#[test]
fn a_top_level_array_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let (r, s) = write_pair(&dir, r#"["r1"]"#, "{}");

    let err = loader::load_inventory(&r, &s).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }), "got {err:?}");
}

#[test]
fn a_non_string_value_names_the_offending_key() {
    let dir = TempDir::new().unwrap();
    let (r, s) = write_pair(&dir, "{}", r#"{"s1": 17}"#);

    let err = loader::load_inventory(&r, &s).unwrap_err();
    match err {
        LoadError::NotAString { key, .. } => assert_eq!(key, "s1"),
        other => panic!("expected NotAString, got {other:?}"),
    }
}

#[test]
fn empty_objects_load_as_an_empty_inventory() {
    let dir = TempDir::new().unwrap();
    let (r, s) = write_pair(&dir, "{}", "{}");

    let inventory = loader::load_inventory(&r, &s).unwrap();
    assert!(inventory.is_empty());
}
