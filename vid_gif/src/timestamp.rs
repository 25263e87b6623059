//! Timestamp normalization and time-window derivation.
//!
//! User-supplied time expressions are either plain seconds ("90", "12.5")
//! or clock form ("1:30", "0:01:30"). Both passes of the encoder receive the
//! same derived window, so all arithmetic happens here once.

use crate::errors::{GifError, Result};

/// Resolved trim window handed to the encoder as `-ss` / `-t` arguments.
/// Both fields unset means the full source duration is used.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeWindow {
    pub offset: Option<f64>,
    pub duration: Option<f64>,
}

/// Convert a time expression (seconds or H:M:S / M:S clock form) to seconds.
pub fn parse_timestamp(expr: &str) -> Result<f64> {
    if let Ok(seconds) = expr.parse::<f64>() {
        return Ok(seconds);
    }

    let parts: Vec<f64> = expr
        .split(':')
        .map(|part| part.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| GifError::InvalidTimestamp(expr.to_string()))?;

    match parts.as_slice() {
        [hours, minutes, seconds] => Ok(hours * 3600.0 + minutes * 60.0 + seconds),
        [minutes, seconds] => Ok(minutes * 60.0 + seconds),
        [seconds] => Ok(*seconds),
        _ => Err(GifError::InvalidTimestamp(expr.to_string())),
    }
}

/// Derive the trim window from resolved start/end seconds.
///
/// A resolved end at or before the start is a rejected request, never
/// silently corrected.
pub fn derive_window(start: Option<f64>, end: Option<f64>) -> Result<TimeWindow> {
    let mut window = TimeWindow {
        offset: start,
        duration: None,
    };

    match (start, end) {
        (Some(start), Some(end)) => {
            let duration = end - start;
            if duration <= 0.0 {
                return Err(GifError::InvalidTimeRange { start, end });
            }
            window.duration = Some(duration);
        }
        (None, Some(end)) => window.duration = Some(end),
        _ => {}
    }

    Ok(window)
}

/// Format elapsed seconds as HH:MM:SS.ss for the info command.
pub fn format_clock(total: f64) -> String {
    let hours = (total / 3600.0).floor();
    let minutes = ((total - hours * 3600.0) / 60.0).floor();
    let seconds = total - hours * 3600.0 - minutes * 60.0;
    format!("{:02}:{:02}:{:05.2}", hours as u64, minutes as u64, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_seconds() {
        let cases: &[(&str, f64)] = &[
            ("0", 0.0),
            ("30", 30.0),
            ("12.5", 12.5),
            ("90.25", 90.25),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_timestamp(input).unwrap(), *expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_clock_forms() {
        let cases: &[(&str, f64)] = &[
            ("1:30", 90.0),
            ("0:30", 30.0),
            ("1:15", 75.0),
            ("0:00:30", 30.0),
            ("1:02:03", 3723.0),
            ("2:00:00.5", 7200.5),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_timestamp(input).unwrap(), *expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_malformed() {
        for input in ["abc", "1:2:3:4", "1:xx", "::", ""] {
            let err = parse_timestamp(input).unwrap_err();
            assert!(
                matches!(err, GifError::InvalidTimestamp(_)),
                "input {:?} gave {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_window_start_and_end() {
        let start = parse_timestamp("0:30").unwrap();
        let end = parse_timestamp("1:15").unwrap();
        let window = derive_window(Some(start), Some(end)).unwrap();
        assert_eq!(window.offset, Some(30.0));
        assert_eq!(window.duration, Some(45.0));
    }

    #[test]
    fn test_window_end_only_trims_from_start() {
        let window = derive_window(None, Some(20.0)).unwrap();
        assert_eq!(window.offset, None);
        assert_eq!(window.duration, Some(20.0));
    }

    #[test]
    fn test_window_unset() {
        let window = derive_window(None, None).unwrap();
        assert_eq!(window, TimeWindow::default());
    }

    #[test]
    fn test_window_rejects_inverted_range() {
        let err = derive_window(Some(10.0), Some(5.0)).unwrap_err();
        assert!(matches!(err, GifError::InvalidTimeRange { .. }));

        // Zero-length windows are rejected too
        let err = derive_window(Some(5.0), Some(5.0)).unwrap_err();
        assert!(matches!(err, GifError::InvalidTimeRange { .. }));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "00:00:00.00");
        assert_eq!(format_clock(75.5), "00:01:15.50");
        assert_eq!(format_clock(3723.0), "01:02:03.00");
    }
}
