//! Contact, address and postal-code patterns.

use tarja_core::models::PiiCategory;

use super::{pii_pattern, PiiPattern};

// ── Email ──────────────────────────────────────────────────────────────────
// Institutional `.gov.br` addresses are excluded after the match (the
// regex crate has no look-ahead); see [`is_institutional_email`].
pii_pattern!(
    RE_EMAIL,
    r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"
);

// ── Full address ───────────────────────────────────────────────────────────
// A recognized street-type token followed by a short alphanumeric run
// ending in a number or a single letter; keeps arbitrary prose out.
pii_pattern!(
    RE_FULL_ADDRESS,
    r"(?i)\b(?:Rua|Av\.|Avenida|Q\.|Qd\.|Quadra|SQN|SQS|SHN|SHS|CLN|CRN|SRES|SHDF|Cond\.|Bloco|Bl\.|Lote|Lt\.|Conjunto|Conj\.)\s+[A-Za-z0-9\s,.-]{1,100}(?:\b\d+|[A-Z]\b)"
);

// ── Postal code (CEP) ──────────────────────────────────────────────────────
pii_pattern!(RE_POSTAL_CODE, r"\b\d{5}[-\s]?\d{3}\b");

// ── Phone ──────────────────────────────────────────────────────────────────
// Hardened against process/registry numbers: every form demands an
// area-code-shaped prefix `[1-9]{2}`, so sequences with a leading zero
// (typically registry or process numbers) can never match.
pii_pattern!(
    RE_PHONE_FORMATTED,
    r"\(([1-9]{2})\)\s?([9][0-9]{4}|[2-5][0-9]{3})-?[0-9]{4}\b"
);
pii_pattern!(
    RE_PHONE_SEMI_FORMATTED,
    r"\b([1-9]{2})\s([9][0-9]{4}|[2-5][0-9]{3})-[0-9]{4}\b"
);
pii_pattern!(RE_PHONE_BARE_MOBILE, r"\b[1-9]{2}9\d{8}\b");
pii_pattern!(RE_PHONE_BARE_LANDLINE, r"\b[1-9]{2}[2-5]\d{7}\b");
// Backup: any 8-12 digit run is accepted if a phone keyword anchors it.
pii_pattern!(
    RE_PHONE_KEYWORD,
    r"(?i)(?:tel|cel|zap|whatsapp|contato|fone)[:\s\.]+\d{8,12}\b"
);

/// Non-phone contact patterns, in priority order.
pub fn all_patterns() -> Vec<PiiPattern> {
    vec![
        PiiPattern {
            name: "email",
            category: PiiCategory::Email,
            regex: &RE_EMAIL,
        },
        PiiPattern {
            name: "full_address",
            category: PiiCategory::FullAddress,
            regex: &RE_FULL_ADDRESS,
        },
        PiiPattern {
            name: "postal_code",
            category: PiiCategory::PostalCode,
            regex: &RE_POSTAL_CODE,
        },
    ]
}

/// Phone patterns in the order they are tried.
pub fn phone_patterns() -> Vec<PiiPattern> {
    vec![
        PiiPattern {
            name: "phone_formatted",
            category: PiiCategory::Phone,
            regex: &RE_PHONE_FORMATTED,
        },
        PiiPattern {
            name: "phone_semi_formatted",
            category: PiiCategory::Phone,
            regex: &RE_PHONE_SEMI_FORMATTED,
        },
        PiiPattern {
            name: "phone_bare_mobile",
            category: PiiCategory::Phone,
            regex: &RE_PHONE_BARE_MOBILE,
        },
        PiiPattern {
            name: "phone_bare_landline",
            category: PiiCategory::Phone,
            regex: &RE_PHONE_BARE_LANDLINE,
        },
        PiiPattern {
            name: "phone_keyword",
            category: PiiCategory::Phone,
            regex: &RE_PHONE_KEYWORD,
        },
    ]
}

/// Whether a matched email belongs to a `.gov.br` domain.
///
/// Stands in for the original look-ahead exclusion: government addresses
/// in citizen requests are institutional, not personal.
pub fn is_institutional_email(matched: &str) -> bool {
    matched
        .rsplit_once('@')
        .map(|(_, domain)| {
            let domain = domain.to_ascii_lowercase();
            domain.ends_with(".gov.br") || domain.contains(".gov.br.")
        })
        .unwrap_or(false)
}
