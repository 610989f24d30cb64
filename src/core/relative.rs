//! Relative-time formatter: "3 hours ago"

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::types::{RelativeDuration, ScanError};
use crate::ISO_FORMAT;

/// Formatter turning a decoded instant into a coarse relative-time string
#[derive(Debug, Default)]
pub struct RelativeFormatter;

impl RelativeFormatter {
    /// Create new formatter
    pub fn new() -> Self {
        Self
    }

    /// Render the elapsed time between `instant` and `now`
    ///
    /// `instant` must be in the exact layout the decoder produces. The
    /// difference is absolute, so an instant in the future still renders
    /// with "ago".
    pub fn format_relative(
        &self,
        instant: &str,
        now: DateTime<Utc>,
    ) -> Result<String, ScanError> {
        let seconds = self.instant_seconds(instant)?;
        let diff_seconds = (now.timestamp() - seconds).abs();
        Ok(RelativeDuration::from_seconds(diff_seconds).to_string())
    }

    /// Parse a decoder-produced instant back into Unix seconds
    pub fn instant_seconds(&self, instant: &str) -> Result<i64, ScanError> {
        let parsed = NaiveDateTime::parse_from_str(instant, ISO_FORMAT).map_err(|e| {
            ScanError::MalformedInstant {
                detail: format!("{}: {}", instant, e),
            }
        })?;
        Ok(parsed.and_utc().timestamp())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn at(iso: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(iso, ISO_FORMAT)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_ninety_seconds_is_one_minute() {
        let formatter = RelativeFormatter::new();
        let now = at("2023-01-16T19:36:11"); // 90 s after the instant
        assert_eq!(
            formatter.format_relative("2023-01-16T19:34:41", now).unwrap(),
            "1 minute ago"
        );
    }

    #[test]
    fn test_under_a_minute() {
        let formatter = RelativeFormatter::new();
        let now = at("2023-01-16T19:35:40"); // 59 s after the instant
        assert_eq!(
            formatter.format_relative("2023-01-16T19:34:41", now).unwrap(),
            "Less than a minute ago"
        );
    }

    #[test]
    fn test_twenty_five_hours_is_one_day() {
        let formatter = RelativeFormatter::new();
        let now = at("2023-01-17T20:34:41"); // 25 h after the instant
        assert_eq!(
            formatter.format_relative("2023-01-16T19:34:41", now).unwrap(),
            "1 day ago"
        );
    }

    #[test]
    fn test_symmetric_for_future_instants() {
        let formatter = RelativeFormatter::new();
        let instant = "2023-01-16T19:34:41";
        let before = at("2023-01-16T16:34:41");
        let after = at("2023-01-16T22:34:41");
        assert_eq!(
            formatter.format_relative(instant, after).unwrap(),
            "3 hours ago"
        );
        assert_eq!(
            formatter.format_relative(instant, before).unwrap(),
            "3 hours ago"
        );
    }

    #[test]
    fn test_round_trips_decoder_output() {
        let formatter = RelativeFormatter::new();
        assert_eq!(
            formatter.instant_seconds("2023-01-16T19:34:41").unwrap(),
            1673897681
        );
        assert_eq!(formatter.instant_seconds("1970-01-01T00:00:00").unwrap(), 0);
    }

    #[test]
    fn test_malformed_instant_is_rejected() {
        let formatter = RelativeFormatter::new();
        let err = formatter
            .format_relative("16/01/2023 19:34", at("2023-01-16T19:34:41"))
            .unwrap_err();
        assert_eq!(err.code(), "MALFORMED_INSTANT");
    }
}
