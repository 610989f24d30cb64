//! Per-match annotation records

use serde::{Deserialize, Serialize};

use crate::types::CandidateUuid;

/// One match's fully decoded result
///
/// This is what the host environment displays next to a matched UUID and
/// what the CLI prints per match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// The matched UUID text
    pub uuid: String,
    /// Byte offset of the match start
    pub start: usize,
    /// Byte offset one past the match end
    pub end: usize,
    /// Decoded creation instant, `YYYY-MM-DDTHH:MM:SS` UTC
    pub decoded: String,
    /// Relative rendering ("3 hours ago"), absent when disabled
    pub time_ago: Option<String>,
}

impl Annotation {
    /// Create annotation from a candidate and its decoded results
    pub fn new(candidate: &CandidateUuid, decoded: String, time_ago: Option<String>) -> Self {
        Self {
            uuid: candidate.text.clone(),
            start: candidate.start,
            end: candidate.end,
            decoded,
            time_ago,
        }
    }

    /// The (start, end) byte span this annotation is keyed by
    pub fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        match &self.time_ago {
            Some(ago) => format!(
                "\x1b[36m{}\x1b[0m  \x1b[32m{}\x1b[0m \x1b[90m({})\x1b[0m",
                self.uuid, self.decoded, ago
            ),
            None => format!("\x1b[36m{}\x1b[0m  \x1b[32m{}\x1b[0m", self.uuid, self.decoded),
        }
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "uuid={} | span={}..{} | decoded={} | ago={}",
            self.uuid,
            self.start,
            self.end,
            self.decoded,
            self.time_ago.as_deref().unwrap_or("-")
        )
    }
}
