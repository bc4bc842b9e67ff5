//! Formatting utilities for timestamps, durations, and identifiers.

/// Format epoch milliseconds as a wall-clock time (`HH:MM:SS`, UTC).
pub fn format_clock(epoch_ms: f64) -> String {
    let total_secs = (epoch_ms / 1000.0) as u64;
    let hour = (total_secs % 86400) / 3600;
    let min = (total_secs % 3600) / 60;
    let sec = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hour, min, sec)
}

/// Format a round-trip duration for the command feed (`87ms`, `1.3s`).
pub fn format_duration(ms: f64) -> String {
    if ms >= 1000.0 {
        format!("{:.1}s", ms / 1000.0)
    } else {
        format!("{}ms", ms.round() as i64)
    }
}

/// Truncate an identifier for compact display.
pub fn short_id(id: &str, len: usize) -> &str {
    match id.char_indices().nth(len) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "00:00:00");
        // 2024-01-01 12:34:56 UTC = 1704112496000 ms
        assert_eq!(format_clock(1_704_112_496_000.0), "12:34:56");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(87.0), "87ms");
        assert_eq!(format_duration(999.4), "999ms");
        assert_eq!(format_duration(1000.0), "1.0s");
        assert_eq!(format_duration(1340.0), "1.3s");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("cmd-12345678abcdef", 8), "cmd-1234");
        assert_eq!(short_id("short", 8), "short");
        assert_eq!(short_id("", 8), "");
    }
}
