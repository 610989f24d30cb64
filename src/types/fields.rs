//! Extracted timestamp components of a version-1 UUID

use serde::{Deserialize, Serialize};

/// The three hex slices that carry the 60-bit timestamp
///
/// Extracted from the hyphen-stripped hex form of a UUID. The version
/// nibble (index 12, always `1` for time-based UUIDs) sits between
/// `time_mid` and `time_high` and is dropped, not carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UuidTimeFields {
    /// Low 32 bits of the timestamp (8 hex digits)
    pub time_low: String,
    /// Middle 16 bits (4 hex digits)
    pub time_mid: String,
    /// High 12 bits (3 hex digits, version nibble removed)
    pub time_high: String,
}

impl UuidTimeFields {
    /// Reassemble the 60-bit timestamp as 15 hex digits
    ///
    /// Invariant: concatenation order is time_high ++ time_mid ++ time_low.
    pub fn hex_timestamp(&self) -> String {
        format!("{}{}{}", self.time_high, self.time_mid, self.time_low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reassembly_order() {
        let fields = UuidTimeFields {
            time_low: "d2719bc0".to_string(),
            time_mid: "95d4".to_string(),
            time_high: "1ed".to_string(),
        };
        assert_eq!(fields.hex_timestamp(), "1ed95d4d2719bc0");
        assert_eq!(fields.hex_timestamp().len(), 15);
    }
}
