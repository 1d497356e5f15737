//! Operator-facing output. Every line starts with a coloured icon so the
//! station terminal can be read at a glance.

use crate::errors::AppError;
use ansi_term::{Colour, Style};
use std::fmt;

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
    Notice,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
            Level::Notice => "🔔",
        }
    }

    fn style(self) -> Style {
        let colour = match self {
            Level::Info => Colour::Blue,
            Level::Success => Colour::Green,
            Level::Warning => Colour::Yellow,
            Level::Error => Colour::Red,
            Level::Notice => Colour::Purple,
        };
        colour.bold()
    }

    fn line<T: fmt::Display>(self, msg: T) -> String {
        format!("{} {msg}", self.style().paint(self.icon()))
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Level::Info.line(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Level::Success.line(msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Level::Warning.line(msg));
}

/// Errors go to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Level::Error.line(msg));
}

/// Transient notice shown right after a clock action.
pub fn notice<T: fmt::Display>(msg: T) {
    println!("{}", Level::Notice.line(msg));
}

pub fn header<T: fmt::Display>(msg: T) {
    let bar = "=".repeat(22);
    println!("{}\n", Colour::Blue.bold().paint(format!("{bar} {msg}")));
}

/// Print every recoverable problem as a warning line.
pub fn warnings<'a, I>(items: I)
where
    I: IntoIterator<Item = &'a AppError>,
{
    for w in items {
        warning(w);
    }
}
