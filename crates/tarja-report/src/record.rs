//! Per-record report in the aggregation layer's wire shape.

use std::collections::BTreeMap;

use serde::Serialize;

use tarja_core::models::{DetectionResult, RiskClassification};

use crate::classify::classify_record;

/// What the aggregation layer receives for one record.
///
/// Field names are part of the wire contract: `has_pii`, `pii_detected`
/// keyed by category wire name, and `risk_assessment`.
#[derive(Debug, Clone, Serialize)]
pub struct RecordReport {
    pub has_pii: bool,
    pub pii_detected: BTreeMap<&'static str, u32>,
    pub invalid_documents: BTreeMap<&'static str, u32>,
    pub risk_assessment: RiskClassification,
    pub redacted_text: String,
}

impl RecordReport {
    pub fn from_result(result: &DetectionResult) -> Self {
        Self {
            has_pii: result.has_pii(),
            pii_detected: result
                .category_counts
                .iter()
                .map(|(cat, count)| (cat.name(), *count))
                .collect(),
            invalid_documents: result
                .invalid_counts
                .iter()
                .map(|(cat, count)| (cat.name(), *count))
                .collect(),
            risk_assessment: classify_record(&result.category_counts),
            redacted_text: result.redacted_text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarja_core::models::PiiCategory;

    #[test]
    fn wire_shape_uses_contract_names() {
        let mut result = DetectionResult::passthrough("texto xxxxx");
        result.category_counts.insert(PiiCategory::Email, 1);

        let report = RecordReport::from_result(&result);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["has_pii"], true);
        assert_eq!(json["pii_detected"]["EMAIL"], 1);
        assert_eq!(json["risk_assessment"]["level"], "MODERATE");
        assert_eq!(json["redacted_text"], "texto xxxxx");
    }

    #[test]
    fn clean_record_reports_public() {
        let report = RecordReport::from_result(&DetectionResult::passthrough("ok"));
        assert!(!report.has_pii);
        assert!(report.pii_detected.is_empty());
        assert!(report.risk_assessment.reasons.is_empty());
    }
}
