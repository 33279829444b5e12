//! Per-record risk classification.

use std::collections::BTreeMap;

use tarja_core::models::{PiiCategory, RiskClassification, RiskLevel, Severity};

/// Classify one record from its category counts.
///
/// Pure function of the counts: any critical-severity category makes the
/// record critical, any remaining moderate category makes it moderate,
/// otherwise the record is publishable. Reasons carry the descriptions
/// of the triggering categories, in category order.
pub fn classify_record(category_counts: &BTreeMap<PiiCategory, u32>) -> RiskClassification {
    let triggering = |severity: Severity| -> Vec<String> {
        PiiCategory::ALL
            .iter()
            .filter(|cat| cat.severity() == severity)
            .filter(|cat| category_counts.get(cat).copied().unwrap_or(0) > 0)
            .map(|cat| cat.description().to_string())
            .collect()
    };

    let critical = triggering(Severity::Critical);
    if !critical.is_empty() {
        return RiskClassification {
            level: RiskLevel::Critical,
            reasons: critical,
        };
    }

    let moderate = triggering(Severity::Moderate);
    if !moderate.is_empty() {
        return RiskClassification {
            level: RiskLevel::Moderate,
            reasons: moderate,
        };
    }

    RiskClassification::public()
}
