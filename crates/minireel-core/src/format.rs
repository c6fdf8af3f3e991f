//! Clock-style time formatting for the transport bar and card badges

/// Format seconds as `M:SS`, or `H:MM:SS` once an hour is reached.
///
/// Negative, NaN and infinite inputs render as `0:00`. Fractions are truncated.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let total = seconds.floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Compact duration badge for video cards
pub fn format_duration(seconds: u32) -> String {
    format_time(f64::from(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3661.0), "1:01:01");
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(600.0), "10:00");
    }

    #[test]
    fn test_format_time_invalid_input() {
        assert_eq!(format_time(-1.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(596), "9:56");
        assert_eq!(format_duration(15), "0:15");
    }
}
