//! Scan pipeline: matcher → decoder → relative formatter
//!
//! One candidate's decode failure never aborts the batch; the offending
//! candidate is skipped and the rest are annotated normally.

use chrono::{DateTime, Utc};

use crate::core::{RelativeFormatter, TimestampDecoder, UuidMatcher};
use crate::types::{Annotation, CandidateUuid, ScanError};

/// Full scan pipeline over a block of text
#[derive(Debug)]
pub struct Scanner {
    matcher: UuidMatcher,
    decoder: TimestampDecoder,
    formatter: RelativeFormatter,
    time_ago_enabled: bool,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// Create scanner with relative-time rendering on (the default)
    pub fn new() -> Self {
        Self::with_time_ago(true)
    }

    /// Create scanner with relative-time rendering set explicitly
    pub fn with_time_ago(enabled: bool) -> Self {
        Self {
            matcher: UuidMatcher::new(),
            decoder: TimestampDecoder::new(),
            formatter: RelativeFormatter::new(),
            time_ago_enabled: enabled,
        }
    }

    /// Is the relative-time column computed?
    pub fn time_ago_enabled(&self) -> bool {
        self.time_ago_enabled
    }

    /// Scan text and annotate every decodable candidate
    pub fn scan(&self, text: &str, now: DateTime<Utc>) -> Vec<Annotation> {
        self.matcher
            .find_all(text)
            .filter_map(|candidate| self.annotate(&candidate, now).ok())
            .collect()
    }

    /// Decode one candidate and, when enabled, render its relative time
    pub fn annotate(
        &self,
        candidate: &CandidateUuid,
        now: DateTime<Utc>,
    ) -> Result<Annotation, ScanError> {
        let decoded = self.decoder.decode(&candidate.text)?;
        let time_ago = if self.time_ago_enabled {
            Some(self.formatter.format_relative(&decoded, now)?)
        } else {
            None
        };
        Ok(Annotation::new(candidate, decoded, time_ago))
    }
}

// =============================================================================
// TESTS
// =============================================================================
