//! Inventory ingestion.
//!
//! Both input files carry a JSON object whose keys are device names and
//! whose values are address strings. The two namespaces land in one
//! [`Inventory`] — routers first, switches second, each in file order —
//! with every entry tagged by the file it came from.
//!
//! Loading is all-or-nothing: any unreadable or malformed file aborts the
//! program before the first prompt, so a session never runs against a
//! half-loaded inventory.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use equipr_common::inventory::device::{DeviceKind, Inventory};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} does not contain a JSON object: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: value for {key:?} is not a string", .path.display())]
    NotAString { path: PathBuf, key: String },
}

/// Loads the router file, then the switch file, into a merged inventory.
pub fn load_inventory(routers_file: &Path, switches_file: &Path) -> Result<Inventory, LoadError> {
    let mut inventory = Inventory::new();
    load_file(routers_file, DeviceKind::Router, &mut inventory)?;
    load_file(switches_file, DeviceKind::Switch, &mut inventory)?;
    Ok(inventory)
}

fn load_file(path: &Path, kind: DeviceKind, inventory: &mut Inventory) -> Result<(), LoadError> {
    let text: String = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // preserve_order keeps the file's key order, which is what the
    // inventory listing shows.
    let entries: serde_json::Map<String, Value> =
        serde_json::from_str(&text).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let count: usize = entries.len();
    for (name, value) in entries {
        let Value::String(address) = value else {
            return Err(LoadError::NotAString {
                path: path.to_path_buf(),
                key: name,
            });
        };
        inventory.push(name, address, kind);
    }

    debug!("loaded {count} {} entries from {}", kind.label(), path.display());
    Ok(())
}
