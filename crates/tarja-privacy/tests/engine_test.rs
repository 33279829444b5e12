//! End-to-end pipeline behavior over single records.

use std::sync::Arc;

use tarja_core::models::PiiCategory;
use tarja_core::traits::{Entity, EntityLabel, IRecognizer};
use tarja_core::{TarjaError, TarjaResult};
use tarja_privacy::DetectionEngine;

/// Recognizer stub returning a fixed entity list.
struct FixedRecognizer {
    entities: Vec<Entity>,
}

impl IRecognizer for FixedRecognizer {
    fn recognize(&self, _text: &str) -> TarjaResult<Vec<Entity>> {
        Ok(self.entities.clone())
    }
}

/// Recognizer stub that always fails.
struct BrokenRecognizer;

impl IRecognizer for BrokenRecognizer {
    fn recognize(&self, _text: &str) -> TarjaResult<Vec<Entity>> {
        Err(TarjaError::Recognizer {
            message: "model not loaded".to_string(),
        })
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("tarja_privacy=debug")
        .try_init();
}

fn person_entity(text: &str, needle: &str) -> Entity {
    let start = text.find(needle).unwrap();
    Entity {
        start,
        end: start + needle.len(),
        label: EntityLabel::Person,
        text: needle.to_string(),
    }
}

#[test]
fn empty_input_passes_through() {
    let engine = DetectionEngine::new();
    let result = engine.detect_and_redact("").unwrap();
    assert!(!result.has_pii());
    assert_eq!(result.redacted_text, "");

    let result = engine.detect_and_redact_record(None).unwrap();
    assert!(!result.has_pii());
}

#[test]
fn formatted_tax_id_needs_no_context() {
    let engine = DetectionEngine::new();
    let result = engine
        .detect_and_redact("segue o documento 123.456.789-09 anexo")
        .unwrap();
    assert_eq!(result.count(PiiCategory::IndividualTaxId), 1);
    assert!(result.has_identifier);
}

#[test]
fn bare_tax_id_requires_corroborating_context() {
    let engine = DetectionEngine::new();

    let with_context = engine
        .detect_and_redact("CPF do requerente: 52998224725")
        .unwrap();
    assert_eq!(with_context.count(PiiCategory::IndividualTaxId), 1);

    let without_context = engine
        .detect_and_redact("registro interno 52998224725 arquivado")
        .unwrap();
    assert_eq!(without_context.count(PiiCategory::IndividualTaxId), 0);
}

#[test]
fn invalid_checksum_still_masked_but_not_identifying() {
    let engine = DetectionEngine::new();
    let result = engine
        .detect_and_redact("CPF 111.111.111-11 recusado")
        .unwrap();
    assert_eq!(result.count(PiiCategory::IndividualTaxId), 1);
    assert_eq!(
        result.invalid_counts.get(&PiiCategory::IndividualTaxId),
        Some(&1)
    );
    assert!(!result.has_identifier);
    assert!(result.redacted_text.contains("xxx.xxx.xxx-xx"));
}

#[test]
fn legal_process_outranks_phone_on_overlap() {
    let engine = DetectionEngine::new();
    // The middle run alone is a well-formed mobile number; the process
    // pattern claims the whole span first.
    let result = engine
        .detect_and_redact("processo 00058 61987654321/2023-11 em andamento")
        .unwrap();
    assert_eq!(result.count(PiiCategory::LegalProcess), 1);
    assert_eq!(result.count(PiiCategory::Phone), 0);
}

#[test]
fn sensitive_topic_gated_on_identifier() {
    let engine = DetectionEngine::new();

    let ungated = engine
        .detect_and_redact("informações sobre tratamento de câncer")
        .unwrap();
    assert_eq!(ungated.count(PiiCategory::SensitiveHealth), 0);
    assert_eq!(ungated.redacted_text, "informações sobre tratamento de câncer");

    let gated = engine
        .detect_and_redact("CPF 529.982.247-25, em tratamento de câncer")
        .unwrap();
    assert_eq!(gated.count(PiiCategory::SensitiveHealth), 1);
    assert_eq!(gated.count(PiiCategory::IndividualTaxId), 1);
    assert!(!gated.redacted_text.contains("câncer"));
}

#[test]
fn redaction_preserves_length_and_punctuation() {
    let engine = DetectionEngine::new();
    let text = "CPF: 123.456.789-09";
    let result = engine.detect_and_redact(text).unwrap();
    assert_eq!(result.redacted_text, "CPF: xxx.xxx.xxx-xx");
    assert_eq!(
        result.redacted_text.chars().count(),
        text.chars().count()
    );
}

#[test]
fn institutional_email_not_counted() {
    let engine = DetectionEngine::new();
    let result = engine
        .detect_and_redact("responder para ouvidoria@cidade.gov.br ou ana@gmail.com")
        .unwrap();
    assert_eq!(result.count(PiiCategory::Email), 1);
    assert!(result.redacted_text.contains("ouvidoria@cidade.gov.br"));
    assert!(!result.redacted_text.contains("ana@gmail.com"));
}

#[test]
fn phone_shaped_run_near_registry_label_rejected() {
    let engine = DetectionEngine::new();
    let result = engine
        .detect_and_redact("meu RG já informado: 61987654321")
        .unwrap();
    assert_eq!(result.count(PiiCategory::Phone), 0);
}

#[test]
fn lowercase_street_prose_is_still_an_address() {
    // The address pattern is case-insensitive end to end, including the
    // single-letter tail, so all-lowercase street prose is claimed.
    let engine = DetectionEngine::new();
    let result = engine.detect_and_redact("rua das flores").unwrap();
    assert_eq!(result.count(PiiCategory::FullAddress), 1);
    assert_eq!(result.redacted_text, "xxx xxx xxxxxx");
}

#[test]
fn invalid_tax_id_does_not_open_sensitive_gate() {
    // An ID that fails its check digits is masked and counted but does
    // not vouch for the record, so sensitive phrases stay unflagged.
    let engine = DetectionEngine::new();
    let result = engine
        .detect_and_redact("CPF 111.111.111-11, paciente com câncer")
        .unwrap();
    assert_eq!(result.count(PiiCategory::IndividualTaxId), 1);
    assert_eq!(
        result.invalid_counts.get(&PiiCategory::IndividualTaxId),
        Some(&1)
    );
    assert_eq!(result.count(PiiCategory::SensitiveHealth), 0);
    assert!(!result.has_identifier);
    assert!(result.redacted_text.contains("câncer"));
}

#[test]
fn person_name_from_recognizer_counted() {
    let text = "requerimento aberto por Maria Silva nesta data";
    let recognizer = FixedRecognizer {
        entities: vec![person_entity(text, "Maria Silva")],
    };
    let engine = DetectionEngine::with_recognizer(Arc::new(recognizer));
    let result = engine.detect_and_redact(text).unwrap();
    assert_eq!(result.count(PiiCategory::PersonName), 1);
    assert!(result.has_identifier);
    assert!(!result.redacted_text.contains("Maria"));
}

#[test]
fn organizational_entity_rejected_despite_first_name() {
    let text = "representado por João Advogados Associados no processo";
    let recognizer = FixedRecognizer {
        entities: vec![person_entity(text, "João Advogados Associados")],
    };
    let engine = DetectionEngine::with_recognizer(Arc::new(recognizer));
    let result = engine.detect_and_redact(text).unwrap();
    assert_eq!(result.count(PiiCategory::PersonName), 0);
}

#[test]
fn recognizer_failure_keeps_regex_detections() {
    init_tracing();
    let text = "contatar ana@gmail.com, CPF 123.456.789-09";
    let broken = DetectionEngine::with_recognizer(Arc::new(BrokenRecognizer));
    let plain = DetectionEngine::new();

    let with_broken = broken.detect_and_redact(text).unwrap();
    let without = plain.detect_and_redact(text).unwrap();
    assert_eq!(with_broken.category_counts, without.category_counts);
    assert_eq!(with_broken.count(PiiCategory::Email), 1);
    assert_eq!(with_broken.count(PiiCategory::IndividualTaxId), 1);
}

#[test]
fn person_name_gates_sensitive_topics() {
    let text = "Maria Silva informa que recebe bolsa família";
    let recognizer = FixedRecognizer {
        entities: vec![person_entity(text, "Maria Silva")],
    };
    let engine = DetectionEngine::with_recognizer(Arc::new(recognizer));
    let result = engine.detect_and_redact(text).unwrap();
    assert_eq!(result.count(PiiCategory::PersonName), 1);
    assert_eq!(result.count(PiiCategory::SensitiveSocial), 1);
}
