//! uuidwhen: Find version-1 UUIDs in text and decode their timestamps
//!
//! Pipeline: text → UuidMatcher → TimestampDecoder → RelativeFormatter

pub mod core;
pub mod types;

// =============================================================================
// TIMESTAMP CONSTANTS [C] - RFC 4122 §4.1.4
// =============================================================================

/// 100-nanosecond ticks between the UUID epoch (1582-10-15T00:00:00 UTC,
/// the Gregorian calendar reform) and the Unix epoch (1970-01-01T00:00:00 UTC)
pub const GREGORIAN_UNIX_OFFSET_TICKS: i64 = 122_192_928_000_000_000;

/// 100-nanosecond ticks per second
pub const TICKS_PER_SECOND: i64 = 10_000_000;

// =============================================================================
// RELATIVE-TIME BUCKET BOUNDARIES [C]
// =============================================================================

/// Seconds per minute (minutes bucket)
pub const SECS_PER_MINUTE: i64 = 60;

/// Seconds per hour (hours bucket)
pub const SECS_PER_HOUR: i64 = 3_600;

/// Seconds per day (days bucket, highest priority)
pub const SECS_PER_DAY: i64 = 86_400;

// =============================================================================
// FORMATS
// =============================================================================

/// Layout of decoded instants: ISO-8601, seconds resolution, implicit UTC
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
