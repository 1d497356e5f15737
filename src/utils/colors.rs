/// ANSI color helper utilities for terminal output.
use crate::models::{EmploymentStatus, EventType};
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Green for IN, red for OUT.
pub fn colorize_event(kind: EventType) -> String {
    match kind {
        EventType::In => Colour::Green.bold().paint("IN").to_string(),
        EventType::Out => Colour::Red.bold().paint("OUT").to_string(),
    }
}

pub fn colorize_employment(status: EmploymentStatus) -> String {
    match status {
        EmploymentStatus::Active => Colour::Cyan.paint(status.as_str()).to_string(),
        EmploymentStatus::Inactive => Colour::Fixed(8).paint(status.as_str()).to_string(),
    }
}

/// Grey out placeholders such as `-` or an empty string.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
