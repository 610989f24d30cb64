//! Error taxonomy for decode and format failures
//!
//! A text with zero matches is an empty result, not an error. Every
//! failure here is recoverable: callers skip the offending candidate
//! and keep going.

use serde::Serialize;

/// Failures surfaced by the decoder and the relative-time formatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ScanError {
    /// Input does not carry exactly 32 hex characters after hyphen
    /// removal, or an extracted slice is not valid hexadecimal
    MalformedUuid {
        /// What was wrong with the input
        detail: String,
    },
    /// Instant string does not parse as `YYYY-MM-DDTHH:MM:SS`
    MalformedInstant {
        /// What was wrong with the input
        detail: String,
    },
}

impl ScanError {
    /// Get the code string (for parseable output)
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedUuid { .. } => "MALFORMED_UUID",
            Self::MalformedInstant { .. } => "MALFORMED_INSTANT",
        }
    }

    /// Get the failure detail
    pub fn detail(&self) -> &str {
        match self {
            Self::MalformedUuid { detail } => detail,
            Self::MalformedInstant { detail } => detail,
        }
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.detail())
    }
}

impl std::error::Error for ScanError {}
