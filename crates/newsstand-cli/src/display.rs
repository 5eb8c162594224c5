//! Display helpers for the demo output
//!
//! The pipeline renders as one section per stage, with glyph-prefixed lines
//! underneath. Colors degrade gracefully on dumb terminals via `colored`.

use colored::*;

/// Print a stage header
pub fn section(title: &str) {
    println!();
    println!("{} {}", "▐".bright_black(), title.bright_white().bold());
    println!("{}", "─".repeat(60).bright_black());
}

/// Print a success line
pub fn success(message: &str) {
    println!("  {} {}", "✓".bright_green(), message);
}

/// Print a failure line
pub fn error(message: &str) {
    println!("  {} {}", "✗".bright_red(), message.bright_red());
}

/// Print a candidate line in the evaluation trace
pub fn info(message: &str) {
    println!("  {} {}", "→".bright_blue(), message);
}

/// Print an indented key-value detail under the current line
pub fn kv(key: &str, value: &str) {
    println!("      {}: {}", key.bright_black(), value.bright_cyan());
}

/// Print a top-level labeled value
pub fn labeled(label: &str, value: &str) {
    println!("  {}: {}", label.bright_white(), value.bright_cyan());
}
