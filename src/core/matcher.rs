//! UUID matcher: scans text for version-1 UUID shaped substrings

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::CandidateUuid;

lazy_static! {
    // =========================================================================
    // Version-1 UUID: 8 hex / 4 hex / version nibble `1` + 3 hex /
    // variant nibble [89ab] + 3 hex / 12 hex, word-bounded.
    // Lowercase hex only; uppercase UUIDs deliberately do not match.
    // =========================================================================
    static ref RE_UUID_V1: Regex = Regex::new(
        r"\b[0-9a-f]{8}-[0-9a-f]{4}-1[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}\b"
    ).unwrap();
}

/// Matcher for version-1 UUIDs in arbitrary text
#[derive(Debug, Default)]
pub struct UuidMatcher;

impl UuidMatcher {
    /// Create new matcher
    pub fn new() -> Self {
        Self
    }

    /// Find all non-overlapping candidates in text, in text order
    ///
    /// Pure scan: re-running on the same text yields the same sequence.
    pub fn find_all<'t>(&self, text: &'t str) -> impl Iterator<Item = CandidateUuid> + 't {
        RE_UUID_V1
            .find_iter(text)
            .map(|m| CandidateUuid::new(m.as_str(), m.start(), m.end()))
    }

    /// First candidate in text, if any
    pub fn first(&self, text: &str) -> Option<CandidateUuid> {
        self.find_all(text).next()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const V1: &str = "d2719bc0-95d4-11ed-9999-325096b39f47";

    #[test]
    fn test_empty_text_has_no_candidates() {
        let matcher = UuidMatcher::new();
        assert_eq!(matcher.find_all("").count(), 0);
    }

    #[test]
    fn test_plain_prose_has_no_candidates() {
        let matcher = UuidMatcher::new();
        assert_eq!(matcher.find_all("no identifiers in this sentence").count(), 0);
    }

    #[test]
    fn test_single_match_with_offsets() {
        let matcher = UuidMatcher::new();
        let text = format!("id: {} (created recently)", V1);
        let candidate = matcher.first(&text).unwrap();
        assert_eq!(candidate.text, V1);
        assert_eq!(candidate.start, 4);
        assert_eq!(candidate.end, 4 + 36);
    }

    #[test]
    fn test_multiple_matches_in_text_order() {
        let matcher = UuidMatcher::new();
        let text = format!(
            "first {} then 13814000-1dd2-11b2-9999-325096b39f47 done",
            V1
        );
        let found: Vec<_> = matcher.find_all(&text).collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text, V1);
        assert_eq!(found[1].text, "13814000-1dd2-11b2-9999-325096b39f47");
        assert!(found[0].end <= found[1].start);
    }

    #[test]
    fn test_uppercase_does_not_match() {
        let matcher = UuidMatcher::new();
        let upper = V1.to_uppercase();
        assert!(matcher.first(&upper).is_none());
    }

    #[test]
    fn test_version_4_does_not_match() {
        let matcher = UuidMatcher::new();
        // Version nibble is 4, not 1
        assert!(matcher
            .first("38058daf-b2cd-4832-902a-83583ac07e28")
            .is_none());
    }

    #[test]
    fn test_wrong_variant_nibble_does_not_match() {
        let matcher = UuidMatcher::new();
        // Variant nibble must be one of 8, 9, a, b
        assert!(matcher
            .first("d2719bc0-95d4-11ed-7999-325096b39f47")
            .is_none());
    }

    #[test]
    fn test_word_boundary_is_required() {
        let matcher = UuidMatcher::new();
        let glued = format!("x{}", V1);
        assert!(matcher.first(&glued).is_none());
        let trailing = format!("{}f", V1);
        assert!(matcher.first(&trailing).is_none());
    }

    #[test]
    fn test_scan_is_restartable() {
        let matcher = UuidMatcher::new();
        let text = format!("{} and {}", V1, V1);
        let first: Vec<_> = matcher.find_all(&text).collect();
        let second: Vec<_> = matcher.find_all(&text).collect();
        assert_eq!(first, second);
    }
}
