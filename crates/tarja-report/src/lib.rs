//! # tarja-report
//!
//! Turns per-record detection results into risk labels and corpus-level
//! statistics. The engine emits one [`DetectionResult`] per record and
//! holds no aggregate state; everything here is a pure fold over those
//! results.
//!
//! [`DetectionResult`]: tarja_core::models::DetectionResult

pub mod classify;
pub mod corpus;
pub mod record;

pub use classify::classify_record;
pub use corpus::{
    category_breakdown, classify_corpus, recommendations, CategoryBreakdown, CorpusReport,
};
pub use record::RecordReport;
