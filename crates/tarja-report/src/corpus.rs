//! Corpus-level aggregation and escalation.

use chrono::Utc;
use serde::Serialize;

use tarja_core::constants::CORPUS_CRITICAL_PROPORTION;
use tarja_core::models::{
    CorpusStatistics, DetectionResult, PiiCategory, RiskClassification, RiskLevel, Severity,
};

use crate::classify::classify_record;

/// Incremental fold over per-record detection results.
///
/// `observe` each result as it is produced, then `finish` to obtain the
/// final statistics block.
#[derive(Debug, Clone)]
pub struct CorpusReport {
    stats: CorpusStatistics,
}

impl CorpusReport {
    pub fn new() -> Self {
        Self {
            stats: CorpusStatistics {
                total_records: 0,
                records_with_pii: 0,
                records_with_critical: 0,
                category_totals: Default::default(),
                invalid_totals: Default::default(),
                records_per_level: Default::default(),
                started_at: Utc::now(),
                finished_at: None,
            },
        }
    }

    /// Fold one record result into the aggregate.
    pub fn observe(&mut self, result: &DetectionResult) {
        self.stats.total_records += 1;
        if result.has_pii() {
            self.stats.records_with_pii += 1;
        }
        if result
            .category_counts
            .keys()
            .any(|cat| cat.severity() == Severity::Critical)
        {
            self.stats.records_with_critical += 1;
        }
        let level = classify_record(&result.category_counts).level;
        *self.stats.records_per_level.entry(level).or_insert(0) += 1;
        for (cat, count) in &result.category_counts {
            *self.stats.category_totals.entry(*cat).or_insert(0) += count;
        }
        for (cat, count) in &result.invalid_counts {
            *self.stats.invalid_totals.entry(*cat).or_insert(0) += count;
        }
    }

    /// Close the report and return the statistics.
    pub fn finish(mut self) -> CorpusStatistics {
        self.stats.finished_at = Some(Utc::now());
        tracing::info!(
            total = self.stats.total_records,
            with_pii = self.stats.records_with_pii,
            critical = self.stats.records_with_critical,
            "corpus scan finished"
        );
        self.stats
    }
}

impl Default for CorpusReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a whole corpus.
///
/// A high proportion of critical records escalates the aggregate label
/// beyond what any single record would carry; at the other end, isolated
/// personal data in a large corpus stays at the low tier.
pub fn classify_corpus(stats: &CorpusStatistics) -> RiskClassification {
    if stats.critical_rate() > CORPUS_CRITICAL_PROPORTION {
        return RiskClassification {
            level: RiskLevel::Critical,
            reasons: vec![format!(
                "{:.1}% dos registros contêm dados pessoais críticos",
                stats.critical_rate() * 100.0
            )],
        };
    }
    if stats.records_with_critical > 0 {
        return RiskClassification {
            level: RiskLevel::Moderate,
            reasons: vec![format!(
                "{} registro(s) com dados pessoais críticos",
                stats.records_with_critical
            )],
        };
    }
    if stats.records_with_pii > 0 {
        return RiskClassification {
            level: RiskLevel::Low,
            reasons: vec![format!(
                "{} registro(s) com dados pessoais não críticos",
                stats.records_with_pii
            )],
        };
    }
    RiskClassification::public()
}

/// Handling guidance for a corpus, keyed on what was actually found.
pub fn recommendations(stats: &CorpusStatistics) -> Vec<String> {
    let mut lines = Vec::new();
    let found = |cat: PiiCategory| stats.category_totals.get(&cat).copied().unwrap_or(0) > 0;

    match classify_corpus(stats).level {
        RiskLevel::Critical => {
            lines.push("Não publicar a base sem anonimização completa".to_string());
            lines.push("Restringir o acesso à base original e registrar consultas".to_string());
        }
        RiskLevel::Moderate => {
            lines.push("Publicar somente a versão mascarada dos registros".to_string());
        }
        RiskLevel::Low => {
            lines.push("Publicar a versão mascarada; revisão amostral é suficiente".to_string());
        }
        RiskLevel::Public => {
            lines.push("Base publicável sem restrições".to_string());
            return lines;
        }
    }

    if found(PiiCategory::IndividualTaxId) || found(PiiCategory::GeneralRegistry) {
        lines.push("Pseudonimizar os documentos de identificação antes de qualquer cruzamento".to_string());
    }
    if found(PiiCategory::Phone) || found(PiiCategory::Email) || found(PiiCategory::FullAddress) {
        lines.push("Verificar consentimento para uso dos dados de contato".to_string());
    }
    if PiiCategory::ALL
        .iter()
        .any(|cat| cat.is_sensitive() && found(*cat))
    {
        lines.push("Tratar os registros com dados sensíveis conforme a LGPD art. 11".to_string());
    }
    if stats.invalid_totals.values().any(|count| *count > 0) {
        lines.push("Revisar manualmente os documentos com dígito verificador inválido".to_string());
    }
    lines
}

/// One row of the per-category report table.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub category: PiiCategory,
    pub description: &'static str,
    pub severity: Severity,
    pub count: u32,
    /// Share of all hits in the corpus, in `[0, 1]`.
    pub share: f64,
    pub invalid: u32,
}

/// Per-category totals, most frequent first. Categories with no hits
/// are omitted.
pub fn category_breakdown(stats: &CorpusStatistics) -> Vec<CategoryBreakdown> {
    let total = stats.total_hits();
    let mut rows: Vec<CategoryBreakdown> = stats
        .category_totals
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(cat, count)| CategoryBreakdown {
            category: *cat,
            description: cat.description(),
            severity: cat.severity(),
            count: *count,
            share: f64::from(*count) / f64::from(total.max(1)),
            invalid: stats.invalid_totals.get(cat).copied().unwrap_or(0),
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then(a.category.cmp(&b.category)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarja_core::models::DetectionResult;

    fn result_with(pairs: &[(PiiCategory, u32)]) -> DetectionResult {
        let mut result = DetectionResult::passthrough("");
        for (cat, count) in pairs {
            result.category_counts.insert(*cat, *count);
        }
        result
    }

    #[test]
    fn empty_corpus_is_public() {
        let stats = CorpusReport::new().finish();
        assert_eq!(classify_corpus(&stats).level, RiskLevel::Public);
        assert_eq!(
            recommendations(&stats),
            vec!["Base publicável sem restrições"]
        );
    }

    #[test]
    fn proportion_escalates_to_critical() {
        let mut report = CorpusReport::new();
        // 2 of 10 records critical: 20% > threshold.
        for _ in 0..2 {
            report.observe(&result_with(&[(PiiCategory::IndividualTaxId, 1)]));
        }
        for _ in 0..8 {
            report.observe(&result_with(&[]));
        }
        let stats = report.finish();
        assert_eq!(classify_corpus(&stats).level, RiskLevel::Critical);
        assert_eq!(stats.records_per_level[&RiskLevel::Critical], 2);
        assert_eq!(stats.records_per_level[&RiskLevel::Public], 8);
    }

    #[test]
    fn rare_critical_record_stays_moderate() {
        let mut report = CorpusReport::new();
        report.observe(&result_with(&[(PiiCategory::GeneralRegistry, 1)]));
        for _ in 0..19 {
            report.observe(&result_with(&[]));
        }
        let stats = report.finish();
        // 5% critical: below the escalation threshold.
        assert_eq!(classify_corpus(&stats).level, RiskLevel::Moderate);
    }

    #[test]
    fn non_critical_pii_is_low() {
        let mut report = CorpusReport::new();
        report.observe(&result_with(&[(PiiCategory::Email, 2)]));
        report.observe(&result_with(&[]));
        let stats = report.finish();
        assert_eq!(classify_corpus(&stats).level, RiskLevel::Low);
    }

    #[test]
    fn totals_accumulate_across_records() {
        let mut report = CorpusReport::new();
        report.observe(&result_with(&[(PiiCategory::Phone, 2)]));
        report.observe(&result_with(&[(PiiCategory::Phone, 1), (PiiCategory::Email, 1)]));
        let stats = report.finish();
        assert_eq!(stats.category_totals[&PiiCategory::Phone], 3);
        assert_eq!(stats.total_records, 2);
        assert_eq!(stats.records_with_pii, 2);
        assert_eq!(stats.total_hits(), 4);
    }

    #[test]
    fn breakdown_sorted_by_count_with_shares() {
        let mut report = CorpusReport::new();
        report.observe(&result_with(&[
            (PiiCategory::Email, 1),
            (PiiCategory::Phone, 5),
        ]));
        let stats = report.finish();
        let rows = category_breakdown(&stats);
        assert_eq!(rows[0].category, PiiCategory::Phone);
        assert_eq!(rows[0].count, 5);
        assert!((rows[0].share - 5.0 / 6.0).abs() < 1e-9);
        assert_eq!(rows[1].category, PiiCategory::Email);
    }

    #[test]
    fn recommendations_cover_found_categories() {
        let mut report = CorpusReport::new();
        report.observe(&result_with(&[
            (PiiCategory::IndividualTaxId, 1),
            (PiiCategory::Phone, 1),
        ]));
        let stats = report.finish();
        let lines = recommendations(&stats);
        assert!(lines.iter().any(|l| l.contains("Pseudonimizar")));
        assert!(lines.iter().any(|l| l.contains("consentimento")));
    }
}
