//! Matched UUID candidates

use serde::{Deserialize, Serialize};

/// A substring that structurally matches the version-1 UUID pattern
///
/// Byte offsets locate the match in the scanned text; they are the key
/// the host environment uses to place and clean up annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateUuid {
    /// The matched 36-character text
    pub text: String,
    /// Byte offset of the first character of the match
    pub start: usize,
    /// Byte offset one past the last character of the match
    pub end: usize,
}

impl CandidateUuid {
    /// Create new candidate
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// The (start, end) byte span of this match
    pub fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

impl std::fmt::Display for CandidateUuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
