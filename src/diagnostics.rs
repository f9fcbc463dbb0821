//! Colored status lines: warnings and error prefixes on stderr, confirmations on stdout.

use colored::{ColoredString, Colorize};

fn prefixed(tag: ColoredString, message: &str) -> String {
    format!("{} {}", tag, message)
}

/// Print a non-fatal problem (empty table, misordered radii) to stderr.
pub fn warn(message: impl AsRef<str>) {
    eprintln!("{}", prefixed("WARN".yellow().bold(), message.as_ref()));
}

/// Format an error message with a colored prefix, for `bail!` and `.with_context`.
pub fn error_message(message: impl AsRef<str>) -> String {
    prefixed("ERROR".red().bold(), message.as_ref())
}

/// The one-line confirmation printed after the page is written.
pub fn ok(message: impl AsRef<str>) {
    println!("{}", prefixed("[ok]".green().bold(), message.as_ref()));
}
