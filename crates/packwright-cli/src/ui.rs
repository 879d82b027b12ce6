//! Terminal output helpers for status messages and the task banner.
//!
//! Status messages go to stderr so stdout stays reserved for the composed
//! configuration payload. The banner is part of the default task's output
//! and prints to stdout.
//!
//! # Examples
//!
//! ```no_run
//! use packwright_cli::ui;
//!
//! ui::init_colors();
//! ui::success("Wrote dist/webpack.json");
//! ui::warning("Override file not found, continuing without it");
//! ```

use owo_colors::OwoColorize;

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print one line of the default-task banner to stdout.
pub fn banner_line(line: &str) {
    println!("{}", line.yellow());
}

/// Initialize color support based on environment.
///
/// Should be called early in the application lifecycle (e.g., in main).
/// `owo-colors` handles terminal capabilities itself; this performs
/// validation and can be extended for custom logic.
pub fn init_colors() {
    let _ = std::env::var("NO_COLOR").is_ok();
}
