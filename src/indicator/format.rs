//! Clock label formatting for the progress indicator.

/// Format a position in seconds to MM:SS format.
///
/// Minutes grow past two digits for long tracks (100 minutes renders as
/// `100:00`). Negative input is clamped to zero before formatting.
///
/// # Arguments
/// * `seconds` - Position in seconds
///
/// # Returns
/// A string in MM:SS format
pub fn format_clock(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Format the time left on a track as a minus-prefixed MM:SS label.
///
/// # Arguments
/// * `position` - Current position in seconds
/// * `max` - Track length in seconds
pub fn format_remaining(position: f64, max: f64) -> String {
    format!("-{}", format_clock(max - position))
}
