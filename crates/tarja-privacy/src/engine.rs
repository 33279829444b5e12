//! The detection pipeline.

use std::sync::Arc;

use regex::Regex;
use std::sync::LazyLock;

use tarja_core::models::{DetectionResult, MatchSpan, PiiCategory};
use tarja_core::traits::{IDetector, IRecognizer};
use tarja_core::TarjaResult;

use crate::accumulator::SpanAccumulator;
use crate::checksum::validate_tax_id;
use crate::context::{has_tax_id_context, is_near_strict_identifier};
use crate::names::filter_person_entities;
use crate::patterns::{self, contact, identifiers, sensitive};
use crate::redact;

/// Scans text for Brazilian-format PII and produces a masked copy.
///
/// Detectors run in a fixed priority order; overlapping claims resolve
/// in favor of the earlier detector. The optional recognizer supplies
/// named entities for the person-name stage and its failures degrade to
/// regex-only detection rather than failing the call.
pub struct DetectionEngine {
    recognizer: Option<Arc<dyn IRecognizer>>,
}

impl DetectionEngine {
    /// Regex-only engine, no named-entity stage.
    pub fn new() -> Self {
        for name in patterns::pattern_health() {
            tracing::warn!(pattern = name, "pattern failed to compile, disabled");
        }
        Self { recognizer: None }
    }

    /// Engine with a named-entity recognizer for the person-name stage.
    pub fn with_recognizer(recognizer: Arc<dyn IRecognizer>) -> Self {
        let mut engine = Self::new();
        engine.recognizer = Some(recognizer);
        engine
    }

    /// Run the full pipeline over one text.
    pub fn detect_and_redact(&self, text: &str) -> TarjaResult<DetectionResult> {
        if text.trim().is_empty() {
            return Ok(DetectionResult::passthrough(text));
        }

        let mut acc = SpanAccumulator::new();

        // Stage 1: legal process numbers. Running these first keeps long
        // digit runs out of the phone stage.
        acc.claim_all(patterns::scan(
            text,
            &identifiers::RE_LEGAL_PROCESS,
            PiiCategory::LegalProcess,
        ));

        // Stage 2: individual tax IDs, checksum-validated. A formatted ID
        // stands on its own; a bare 11-digit run also needs corroborating
        // keywords nearby.
        self.scan_tax_ids(text, &mut acc);

        // Stage 3: person names from the recognizer, cross-validated.
        self.scan_person_names(text, &mut acc);

        // Stage 4: registry numbers and company IDs.
        acc.claim_all(patterns::scan(
            text,
            &identifiers::RE_REGISTRY_LABELED,
            PiiCategory::GeneralRegistry,
        ));
        acc.claim_all(patterns::scan(
            text,
            &identifiers::RE_REGISTRY_NIS_SHAPE,
            PiiCategory::GeneralRegistry,
        ));
        acc.claim_all(patterns::scan(
            text,
            &identifiers::RE_COMPANY_ID,
            PiiCategory::CompanyId,
        ));

        // Stage 5: contact data.
        self.scan_emails(text, &mut acc);
        acc.claim_all(patterns::scan(
            text,
            &contact::RE_FULL_ADDRESS,
            PiiCategory::FullAddress,
        ));
        acc.claim_all(patterns::scan(
            text,
            &contact::RE_POSTAL_CODE,
            PiiCategory::PostalCode,
        ));

        // Stage 6: phones, with the strict-identifier guard.
        self.scan_phones(text, &mut acc);

        // Stage 7: sensitive keywords, only when the record already
        // carries an identifier that ties them to a person.
        let has_identifier = acc.has_identifier();
        acc.claim_all(sensitive::scan_sensitive(text, has_identifier));

        let (mask, category_counts, invalid_counts, has_identifier) = acc.into_parts();
        tracing::debug!(
            hits = category_counts.values().sum::<u32>(),
            masked_bytes = mask.len(),
            has_identifier,
            "detection pass complete"
        );
        Ok(DetectionResult {
            redacted_text: redact::render(text, &mask),
            category_counts,
            invalid_counts,
            has_identifier,
        })
    }

    /// Record-level entry point: a missing field is treated as empty text.
    pub fn detect_and_redact_record(&self, text: Option<&str>) -> TarjaResult<DetectionResult> {
        self.detect_and_redact(text.unwrap_or(""))
    }

    fn scan_tax_ids(&self, text: &str, acc: &mut SpanAccumulator) {
        for (regex, needs_context) in [
            (&identifiers::RE_TAX_ID_FORMATTED, false),
            (&identifiers::RE_TAX_ID_BARE, true),
        ] {
            for m in find_all(text, regex) {
                if needs_context && !has_tax_id_context(text, m.start()) {
                    continue;
                }
                let digits: String = m.as_str().chars().filter(char::is_ascii_digit).collect();
                let valid = validate_tax_id(&digits);
                acc.claim(MatchSpan::with_validity(
                    m.start(),
                    m.end(),
                    PiiCategory::IndividualTaxId,
                    valid,
                ));
            }
        }
    }

    fn scan_person_names(&self, text: &str, acc: &mut SpanAccumulator) {
        let Some(recognizer) = self.recognizer.as_ref() else {
            return;
        };
        match recognizer.recognize(text) {
            Ok(entities) => acc.claim_all(filter_person_entities(text, &entities)),
            Err(err) => {
                tracing::warn!(error = %err, "recognizer failed, continuing regex-only");
            }
        }
    }

    fn scan_emails(&self, text: &str, acc: &mut SpanAccumulator) {
        for m in find_all(text, &contact::RE_EMAIL) {
            if contact::is_institutional_email(m.as_str()) {
                continue;
            }
            acc.claim(MatchSpan::new(m.start(), m.end(), PiiCategory::Email));
        }
    }

    fn scan_phones(&self, text: &str, acc: &mut SpanAccumulator) {
        for pat in contact::phone_patterns() {
            for m in find_all(text, pat.regex) {
                if is_near_strict_identifier(text, m.start()) {
                    continue;
                }
                acc.claim(MatchSpan::new(m.start(), m.end(), PiiCategory::Phone));
            }
        }
    }
}

impl Default for DetectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IDetector for DetectionEngine {
    fn detect_and_redact(&self, text: &str) -> TarjaResult<DetectionResult> {
        DetectionEngine::detect_and_redact(self, text)
    }
}

fn find_all<'t>(
    text: &'t str,
    regex: &'static LazyLock<Option<Regex>>,
) -> Box<dyn Iterator<Item = regex::Match<'t>> + 't> {
    match regex.as_ref() {
        Some(re) => Box::new(re.find_iter(text)),
        None => Box::new(std::iter::empty()),
    }
}
