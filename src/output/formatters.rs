//! Formatting utilities for terminal output

use std::time::Duration;

/// Bar of `width` cells showing `part` as a share of `whole`
///
/// Rounds up, so any non-zero share gets at least one filled cell.
#[must_use]
pub fn share_bar(part: u64, whole: u64, width: usize) -> String {
    let filled = if whole == 0 {
        0
    } else {
        let part = u128::from(part.min(whole));
        let cells = (part * width as u128).div_ceil(u128::from(whole));
        cells as usize
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Human-readable elapsed time: `850ms`, `12.3s`, `4m 05s`
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{millis}ms")
    } else if millis < 60_000 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}
