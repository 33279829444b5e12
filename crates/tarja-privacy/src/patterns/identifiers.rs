//! Structured-identifier patterns (Brazilian formats).

use tarja_core::models::PiiCategory;

use super::{pii_pattern, PiiPattern};

// ── Legal process (SEI) ────────────────────────────────────────────────────
// Matched before phones: removes long digit runs from contention so a
// process number is never mis-tagged as a phone.
pii_pattern!(RE_LEGAL_PROCESS, r"\b\d{5}[-\s]?\d{6,}/?\d{4}[-\s]?\d{2}\b");

// ── Individual tax ID (CPF) ────────────────────────────────────────────────
// Formatted IDs are always accepted; bare 11-digit runs additionally need
// corroborating keywords nearby (see `context`).
pii_pattern!(RE_TAX_ID_FORMATTED, r"\b\d{3}\.\d{3}\.\d{3}-\d{2}\b");
pii_pattern!(RE_TAX_ID_BARE, r"\b\d{11}\b");

// ── Company ID (CNPJ), strictly formatted ─────────────────────────────────
pii_pattern!(RE_COMPANY_ID, r"\b\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}\b");

// ── General registry (RG, CNH, NIS, PIS, ...) ─────────────────────────────
// Label-anchored to avoid over-matching bare numbers. The formatted NIS
// shape is accepted without a label.
pii_pattern!(
    RE_REGISTRY_LABELED,
    r"(?i)(?:RG|CNH|Matr[íi]cula|NIS|PIS|PASEP|NIT|CTPS|T[íi]tulo\s(?:de\s)?Eleitor)[:\s\.]+\d{1,15}[-\d]*"
);
pii_pattern!(RE_REGISTRY_NIS_SHAPE, r"\b\d{3}\.\d{5}\.\d{2}-\d\b");

/// Every identifier pattern, in priority order. The engine scans the
/// tax-ID entries through its checksum/context path rather than from
/// this table; the table still carries them for health reporting.
pub fn all_patterns() -> Vec<PiiPattern> {
    vec![
        PiiPattern {
            name: "legal_process",
            category: PiiCategory::LegalProcess,
            regex: &RE_LEGAL_PROCESS,
        },
        PiiPattern {
            name: "registry_labeled",
            category: PiiCategory::GeneralRegistry,
            regex: &RE_REGISTRY_LABELED,
        },
        PiiPattern {
            name: "registry_nis_shape",
            category: PiiCategory::GeneralRegistry,
            regex: &RE_REGISTRY_NIS_SHAPE,
        },
        PiiPattern {
            name: "company_id",
            category: PiiCategory::CompanyId,
            regex: &RE_COMPANY_ID,
        },
        PiiPattern {
            name: "tax_id_formatted",
            category: PiiCategory::IndividualTaxId,
            regex: &RE_TAX_ID_FORMATTED,
        },
        PiiPattern {
            name: "tax_id_bare",
            category: PiiCategory::IndividualTaxId,
            regex: &RE_TAX_ID_BARE,
        },
    ]
}
