use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::PiiCategory;

/// Per-record output of one `detect_and_redact` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// The masked copy of the input text.
    pub redacted_text: String,
    /// Occurrence count per detected category.
    pub category_counts: BTreeMap<PiiCategory, u32>,
    /// Checksum-failure counts. Currently only carries the tax-ID counter.
    pub invalid_counts: BTreeMap<PiiCategory, u32>,
    /// Whether a non-sensitive identifying category (tax ID, registry
    /// number, validated name) was found in this text.
    pub has_identifier: bool,
}

impl DetectionResult {
    /// A result with no detections, passing `text` through untouched.
    pub fn passthrough(text: impl Into<String>) -> Self {
        Self {
            redacted_text: text.into(),
            category_counts: BTreeMap::new(),
            invalid_counts: BTreeMap::new(),
            has_identifier: false,
        }
    }

    pub fn has_pii(&self) -> bool {
        !self.category_counts.is_empty()
    }

    pub fn count(&self, category: PiiCategory) -> u32 {
        self.category_counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total_hits(&self) -> u32 {
        self.category_counts.values().sum()
    }
}
