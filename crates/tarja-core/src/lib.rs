//! # tarja-core
//!
//! Foundation crate for the Tarja PII detection & redaction engine.
//! Defines all types, traits, errors and constants.
//! Every other crate in the workspace depends on this.

pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use errors::{TarjaError, TarjaResult};
pub use models::{
    DetectionResult, MaskIndexSet, MatchSpan, PiiCategory, RiskClassification, RiskLevel, Severity,
};
pub use traits::{Entity, EntityLabel, IDetector, IRecognizer};
