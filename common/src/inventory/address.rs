//! # Address Validation
//!
//! Checks the dotted-quad strings an operator types for a device.
//!
//! The rules are deliberately strict about shape:
//! * Exactly four `.`-separated segments.
//! * Every segment is an integer in `0..=255`.
//!
//! An accepted string is used verbatim downstream. Nothing is normalized,
//! so `010.0.0.1` stays `010.0.0.1` in the inventory and in the update set.

use std::num::IntErrorKind;

use thiserror::Error;

/// Why an address string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("expected 4 segments, got {0}")]
    SegmentCount(usize),
    #[error("segment {0:?} is not a number")]
    NotANumber(String),
    #[error("segment {0} is outside 0-255")]
    OutOfRange(i64),
}

/// Validates a dotted-quad address string.
///
/// Every malformed shape is a rejection, never a crash: a missing segment,
/// a non-numeric segment and an out-of-range octet all take the same path
/// back to the operator.
pub fn validate(address: &str) -> Result<(), AddressError> {
    let segments: Vec<&str> = address.split('.').collect();
    if segments.len() != 4 {
        return Err(AddressError::SegmentCount(segments.len()));
    }

    for segment in segments {
        let octet: i64 = segment.parse().map_err(|e: std::num::ParseIntError| {
            match e.kind() {
                // "300" overflows nothing at i64 width, but cover huge inputs.
                IntErrorKind::PosOverflow => AddressError::OutOfRange(i64::MAX),
                IntErrorKind::NegOverflow => AddressError::OutOfRange(i64::MIN),
                _ => AddressError::NotANumber(segment.to_string()),
            }
        })?;

        if !(0..=255).contains(&octet) {
            return Err(AddressError::OutOfRange(octet));
        }
    }

    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
