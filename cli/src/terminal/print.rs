use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{colors, format};

pub fn print(msg: &str) {
    println!("{}", msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ EQUIPR v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.color(colors::PRIMARY).bold();
    let rail: ColoredString = "═"
        .repeat((format::TOTAL_WIDTH.saturating_sub(text_width)) / 2)
        .color(colors::SEPARATOR);

    print(&format!("{}{}{}", rail, text, rail));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 1 {
        return;
    }
    print(&format::section_rule(msg));
}

pub fn fat_separator() {
    print(&format!(
        "{}",
        "═".repeat(format::TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}

pub fn centerln(msg: &str) {
    let pad: usize = format::TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2;
    print(&format!("{}{}", " ".repeat(pad), msg));
}
