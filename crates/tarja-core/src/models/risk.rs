use serde::{Deserialize, Serialize};

/// Qualitative disclosure-risk label for a record or a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Contains official identifiers or sensitive topics; must not be
    /// published without full anonymization.
    Critical,
    /// Contains non-sensitive personal data; requires review.
    Moderate,
    /// Corpus-scope only: isolated personal data at low incidence.
    Low,
    /// No personal data found; publishable as is.
    Public,
}

/// A risk label plus the category descriptions that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskClassification {
    pub level: RiskLevel,
    pub reasons: Vec<String>,
}

impl RiskClassification {
    pub fn public() -> Self {
        Self {
            level: RiskLevel::Public,
            reasons: Vec::new(),
        }
    }
}
