//! Serializes a finished session to disk.
//!
//! The two writes are independent on purpose: a failure on one file is the
//! caller's to report and must not stop the other file from being written.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::session::SessionReport;

/// Writes the update set as a compact JSON object, in insertion order.
pub fn write_updates(report: &SessionReport, path: &Path) -> anyhow::Result<()> {
    let mut updates: Map<String, Value> = Map::new();
    for (name, address) in report.updates() {
        updates.insert(name.clone(), Value::String(address.clone()));
    }

    fs::write(path, serde_json::to_string(&Value::Object(updates))?)?;
    Ok(())
}

/// Writes the rejected addresses as a compact JSON array.
pub fn write_invalid(report: &SessionReport, path: &Path) -> anyhow::Result<()> {
    fs::write(path, serde_json::to_string(report.invalid_attempts())?)?;
    Ok(())
}
