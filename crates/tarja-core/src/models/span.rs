use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::PiiCategory;

/// A candidate PII span produced by one detector.
///
/// `start`/`end` are byte offsets into the source text (half-open).
/// `valid` is meaningful only for checksum-validated categories; detectors
/// without a checksum leave it true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub category: PiiCategory,
    pub valid: bool,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize, category: PiiCategory) -> Self {
        Self {
            start,
            end,
            category,
            valid: true,
        }
    }

    pub fn with_validity(start: usize, end: usize, category: PiiCategory, valid: bool) -> Self {
        Self {
            start,
            end,
            category,
            valid,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// The set of byte offsets that must be redacted in the final text.
///
/// Append-only for the duration of one detection call: an offset, once
/// added, is never removed. Overlap queries drive the first-detector-wins
/// policy of the span accumulator.
#[derive(Debug, Clone, Default)]
pub struct MaskIndexSet {
    indices: BTreeSet<usize>,
}

impl MaskIndexSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every offset in `start..end` to the mask.
    pub fn insert_span(&mut self, start: usize, end: usize) {
        self.indices.extend(start..end);
    }

    /// Whether any offset in `start..end` is already masked.
    pub fn intersects(&self, start: usize, end: usize) -> bool {
        self.indices.range(start..end).next().is_some()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
