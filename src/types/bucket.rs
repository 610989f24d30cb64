//! Relative-duration buckets

use serde::{Deserialize, Serialize};

use crate::{SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MINUTE};

/// An elapsed duration bucketed into exactly one coarse unit
///
/// Buckets are evaluated days → hours → minutes → sub-minute; the first
/// unit with a whole count of at least 1 wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelativeDuration {
    /// At least one whole day elapsed
    Days(i64),
    /// Under a day, at least one whole hour
    Hours(i64),
    /// Under an hour, at least one whole minute
    Minutes(i64),
    /// Under a minute
    SubMinute,
}

impl RelativeDuration {
    /// Bucket an elapsed-seconds value
    ///
    /// Takes the absolute value, so instants in the future bucket the
    /// same as instants the same distance in the past.
    pub fn from_seconds(diff_seconds: i64) -> Self {
        let diff = diff_seconds.abs();

        let days = diff / SECS_PER_DAY;
        if days >= 1 {
            return Self::Days(days);
        }

        let hours = diff / SECS_PER_HOUR;
        if hours >= 1 {
            return Self::Hours(hours);
        }

        let minutes = diff / SECS_PER_MINUTE;
        if minutes >= 1 {
            return Self::Minutes(minutes);
        }

        Self::SubMinute
    }
}

impl std::fmt::Display for RelativeDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Days(1) => write!(f, "1 day ago"),
            Self::Days(n) => write!(f, "{} days ago", n),
            Self::Hours(1) => write!(f, "1 hour ago"),
            Self::Hours(n) => write!(f, "{} hours ago", n),
            Self::Minutes(1) => write!(f, "1 minute ago"),
            Self::Minutes(n) => write!(f, "{} minutes ago", n),
            Self::SubMinute => write!(f, "Less than a minute ago"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_minute_boundary() {
        assert_eq!(RelativeDuration::from_seconds(0), RelativeDuration::SubMinute);
        assert_eq!(RelativeDuration::from_seconds(59), RelativeDuration::SubMinute);
        assert_eq!(RelativeDuration::from_seconds(60), RelativeDuration::Minutes(1));
    }

    #[test]
    fn test_days_take_priority_over_hours() {
        // 25 hours is 1 day, not 25 hours
        assert_eq!(
            RelativeDuration::from_seconds(25 * SECS_PER_HOUR),
            RelativeDuration::Days(1)
        );
    }

    #[test]
    fn test_negative_diff_buckets_like_positive() {
        assert_eq!(
            RelativeDuration::from_seconds(-3 * SECS_PER_HOUR),
            RelativeDuration::Hours(3)
        );
    }

    #[test]
    fn test_rendering_pluralizes() {
        assert_eq!(RelativeDuration::Days(1).to_string(), "1 day ago");
        assert_eq!(RelativeDuration::Days(4).to_string(), "4 days ago");
        assert_eq!(RelativeDuration::Hours(1).to_string(), "1 hour ago");
        assert_eq!(RelativeDuration::Minutes(12).to_string(), "12 minutes ago");
        assert_eq!(
            RelativeDuration::SubMinute.to_string(),
            "Less than a minute ago"
        );
    }
}
