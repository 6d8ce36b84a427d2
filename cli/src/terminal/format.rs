use colored::*;
use equipr_common::inventory::device::{Device, DeviceKind};

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// `──⟦ MESSAGE ⟧──` centered in the output width.
pub fn section_rule(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right).color(colors::SEPARATOR)
    )
}

/// One inventory row, name and address joined by a dotted leader.
pub fn device_row(device: &Device, key_width: usize) -> String {
    let leader: String = ".".repeat((key_width + 1).saturating_sub(device.name.len()));
    format!(
        "{} {}{}{} {} {}",
        ">".color(colors::SEPARATOR),
        device.name.color(colors::PRIMARY),
        leader.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        device.address.color(colors::ADDRESS),
        kind_tag(device.kind),
    )
}

pub fn kind_tag(kind: DeviceKind) -> ColoredString {
    format!("({})", kind.label()).color(colors::SEPARATOR)
}
