//! Human-readable formatting
//!
//! Byte counts rendered for dashboards and disk quota displays.

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// Format a raw byte count with the largest fitting unit.
///
/// Sizes under 1 KB print as a bare byte count; larger sizes print with
/// one decimal place. GB is the largest unit used, so multi-terabyte
/// quotas show up as thousands of GB.
pub fn human_size(bytes: u64) -> String {
    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
