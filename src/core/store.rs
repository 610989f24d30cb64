//! Annotation store: the host-integration side of the pipeline
//!
//! The core components are pure; this layer owns the mutable collection
//! of "currently displayed" annotations, keyed by match span. A host
//! environment calls `rescan` on whatever change notification it has and
//! applies the returned diff to its display.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::Scanner;
use crate::types::Annotation;

/// Byte span of a match in the scanned text
pub type Span = (usize, usize);

/// What changed between the previous scan and a fresh one
#[derive(Debug, Clone, Default, Serialize)]
pub struct RescanDiff {
    /// Annotations at spans that are new, or whose UUID text changed
    pub added: Vec<Annotation>,
    /// Spans from the previous scan with no match anymore
    pub removed: Vec<Span>,
    /// Count of spans that carried the same UUID as before
    pub retained: usize,
}

impl RescanDiff {
    /// Did the scan change anything?
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Collection of active annotations, keyed by match span
#[derive(Debug, Default)]
pub struct AnnotationStore {
    annotations: HashMap<Span, Annotation>,
}

impl AnnotationStore {
    /// Create empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one annotation, replacing any previous one at its span
    pub fn insert(&mut self, annotation: Annotation) {
        self.annotations.insert(annotation.span(), annotation);
    }

    /// Annotation at a span, if present
    pub fn get(&self, span: Span) -> Option<&Annotation> {
        self.annotations.get(&span)
    }

    /// Number of active annotations
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Is the store empty?
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Drop all annotations
    pub fn clear(&mut self) {
        self.annotations.clear();
    }

    /// Iterate active annotations in span order
    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        let mut all: Vec<&Annotation> = self.annotations.values().collect();
        all.sort_by_key(|a| a.span());
        all.into_iter()
    }

    /// Rescan text and update only changed spans
    ///
    /// Spans whose UUID is unchanged count as retained; their stored
    /// annotation is still refreshed so relative times track the new
    /// reference instant. A span whose UUID text changed reports as added.
    pub fn rescan(&mut self, scanner: &Scanner, text: &str, now: DateTime<Utc>) -> RescanDiff {
        let fresh = scanner.scan(text, now);

        let mut next: HashMap<Span, Annotation> = HashMap::with_capacity(fresh.len());
        let mut added = Vec::new();
        let mut retained = 0;

        for annotation in fresh {
            let span = annotation.span();
            match self.annotations.get(&span) {
                Some(previous) if previous.uuid == annotation.uuid => retained += 1,
                _ => added.push(annotation.clone()),
            }
            next.insert(span, annotation);
        }

        let mut removed: Vec<Span> = self
            .annotations
            .keys()
            .filter(|span| !next.contains_key(*span))
            .copied()
            .collect();
        removed.sort_unstable();

        self.annotations = next;
        RescanDiff {
            added,
            removed,
            retained,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
