//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Horizontal bar for the histogram, one block per event, capped at `max`.
pub fn bar(count: usize, max: usize) -> String {
    let shown = count.min(max);
    let mut s = "█".repeat(shown);
    if count > max {
        s.push('…');
    }
    s
}
