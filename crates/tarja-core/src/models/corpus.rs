use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{PiiCategory, RiskLevel};

/// Aggregate statistics over many per-record detection results.
///
/// Built by the reporting layer from the `DetectionResult`s the engine
/// emits; the engine itself holds no aggregate state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusStatistics {
    pub total_records: usize,
    pub records_with_pii: usize,
    /// Records containing at least one critical-severity category.
    pub records_with_critical: usize,
    pub category_totals: BTreeMap<PiiCategory, u32>,
    pub invalid_totals: BTreeMap<PiiCategory, u32>,
    /// Record tally per record-level risk label.
    pub records_per_level: BTreeMap<RiskLevel, usize>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl CorpusStatistics {
    pub fn total_hits(&self) -> u32 {
        self.category_totals.values().sum()
    }

    /// Share of records containing any PII, in `[0, 1]`.
    pub fn pii_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            self.records_with_pii as f64 / self.total_records as f64
        }
    }

    /// Share of records containing a critical-severity category.
    pub fn critical_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            self.records_with_critical as f64 / self.total_records as f64
        }
    }

    pub fn elapsed_seconds(&self) -> f64 {
        match self.finished_at {
            Some(end) => (end - self.started_at).num_milliseconds() as f64 / 1000.0,
            None => 0.0,
        }
    }
}
