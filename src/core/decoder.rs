//! Timestamp decoder: 60-bit UUID v1 timestamp → ISO-8601 date-time
//!
//! A version-1 UUID embeds a count of 100-nanosecond ticks since the
//! Gregorian calendar reform (1582-10-15). Decoding re-bases that count
//! onto the Unix epoch and renders it as a calendar date-time.

use chrono::DateTime;

use crate::types::{ScanError, UuidTimeFields};
use crate::{GREGORIAN_UNIX_OFFSET_TICKS, ISO_FORMAT, TICKS_PER_SECOND};

/// Decoder for the timestamp embedded in a version-1 UUID
#[derive(Debug, Default)]
pub struct TimestampDecoder;

impl TimestampDecoder {
    /// Create new decoder
    pub fn new() -> Self {
        Self
    }

    /// Extract the three timestamp components from a UUID string
    ///
    /// Hyphens are stripped first; the remainder must be exactly 32 hex
    /// characters. Index 12 (the version nibble) is skipped, so the
    /// high slice is taken from indices 13..16.
    pub fn extract_fields(&self, uuid: &str) -> Result<UuidTimeFields, ScanError> {
        let hex: String = uuid.chars().filter(|c| *c != '-').collect();

        if hex.len() != 32 {
            return Err(ScanError::MalformedUuid {
                detail: format!(
                    "expected 32 hex characters after hyphen removal, got {}",
                    hex.chars().count()
                ),
            });
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ScanError::MalformedUuid {
                detail: format!("non-hexadecimal characters in {}", hex),
            });
        }

        Ok(UuidTimeFields {
            time_low: hex[0..8].to_string(),
            time_mid: hex[8..12].to_string(),
            time_high: hex[13..16].to_string(),
        })
    }

    /// Reassembled tick count since the UUID epoch (1582-10-15)
    ///
    /// At most 60 bits of value, so it always fits an i64.
    pub fn gregorian_ticks(&self, uuid: &str) -> Result<i64, ScanError> {
        let fields = self.extract_fields(uuid)?;
        i64::from_str_radix(&fields.hex_timestamp(), 16).map_err(|e| ScanError::MalformedUuid {
            detail: format!("timestamp is not hexadecimal: {}", e),
        })
    }

    /// Whole seconds since the Unix epoch
    ///
    /// Division floors toward negative infinity, so tick counts from
    /// before 1970 yield the correct negative second count. Out-of-range
    /// timestamps are not rejected; a pre-Unix-epoch UUID decodes to the
    /// date it actually encodes.
    pub fn decode_seconds(&self, uuid: &str) -> Result<i64, ScanError> {
        let ticks = self.gregorian_ticks(uuid)?;
        Ok((ticks - GREGORIAN_UNIX_OFFSET_TICKS).div_euclid(TICKS_PER_SECOND))
    }

    /// Decode a UUID into its creation instant, `YYYY-MM-DDTHH:MM:SS` UTC
    pub fn decode(&self, uuid: &str) -> Result<String, ScanError> {
        let seconds = self.decode_seconds(uuid)?;
        let when = DateTime::from_timestamp(seconds, 0).ok_or_else(|| ScanError::MalformedUuid {
            detail: format!("second count {} is outside the representable range", seconds),
        })?;
        Ok(when.format(ISO_FORMAT).to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
