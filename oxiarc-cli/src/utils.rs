//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::Level;

/// Create a byte progress bar with standard styling.
///
/// A `len` of `None` gives a spinner, for inputs whose size is unknown.
pub fn create_progress_bar(len: Option<u64>, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    match len {
        Some(len) => {
            let pb = ProgressBar::new(len);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                    .expect("progress bar template is valid")
                    .progress_chars("█▓▒░ "),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("[{elapsed_precise}] {spinner} {bytes} {msg}")
                    .expect("spinner template is valid"),
            );
            pb
        }
    }
}

/// Map `-v`/`-q` flags to a log level.
pub fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Space saved by compression, in percent of the decoded size.
pub fn space_savings(compressed: u64, decoded: u64) -> f64 {
    if decoded == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / decoded as f64) * 100.0
}

/// Format a byte count for humans.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}
