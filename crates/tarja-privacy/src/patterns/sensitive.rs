//! Sensitive-topic keyword scanner (LGPD art. 5º II classes).
//!
//! A sensitive phrase alone does not identify anyone: hits only count
//! when some identifying category was already found in the same text, so
//! generic policy prose never gets flagged as critical.

use regex::Regex;
use std::sync::LazyLock;

use tarja_core::models::{MatchSpan, PiiCategory};

const HEALTH: &[&str] = &[
    r"\bc[âa]ncer\b",
    r"\boncologia\b",
    r"\bhiv\b",
    r"\baids\b",
    r"\basm[áa]tico\b",
    r"\bminha doen[çc]a\b",
    r"\blaudo m[ée]dico\b",
    r"\bCID\s?[A-Z]\d",
    r"\btranstorno\b",
    r"\bdepress[ãa]o\b",
    r"\bdefici[êe]ncia\b",
    r"\bautis",
];

const MINOR: &[&str] = &[
    r"\bmenor de idade\b",
    r"\bcrian[çc]a\b",
    r"\bfilh[ao] (?:de )?menor\b",
    r"\btutela\b",
    r"\bcreche\b",
    r"\balun[ao]\b",
];

const SOCIAL: &[&str] = &[
    r"\bvulnerabilidade\b",
    r"\baux[íi]lio emergencial\b",
    r"\bcesta b[áa]sica\b",
    r"\bbolsa fam[íi]lia\b",
];

const RACE: &[&str] = &[
    r"\bcor d[ae] pele\b",
    r"\braça\b",
    r"\betnia\b",
    r"\bnegro\b",
    r"\bpardo\b",
];

const GENDER: &[&str] = &[
    r"\btrans\b",
    r"\bhormoniza[çc][ãa]o\b",
    r"\bidentidade de g[êe]nero\b",
];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|p| Regex::new(&format!("(?i){p}")).ok())
        .collect()
}

static HEALTH_RE: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(HEALTH));
static MINOR_RE: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(MINOR));
static SOCIAL_RE: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(SOCIAL));
static RACE_RE: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(RACE));
static GENDER_RE: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(GENDER));

/// Compiled keyword table per sensitive category.
pub fn keyword_tables() -> [(PiiCategory, &'static [Regex]); 5] {
    [
        (PiiCategory::SensitiveHealth, HEALTH_RE.as_slice()),
        (PiiCategory::SensitiveMinor, MINOR_RE.as_slice()),
        (PiiCategory::SensitiveSocial, SOCIAL_RE.as_slice()),
        (PiiCategory::SensitiveRace, RACE_RE.as_slice()),
        (PiiCategory::SensitiveGender, GENDER_RE.as_slice()),
    ]
}

/// Table names whose compiled set lost patterns to compile errors.
pub fn pattern_failures() -> Vec<&'static str> {
    let mut failed = Vec::new();
    for (name, raw, compiled) in [
        ("sensitive_health", HEALTH, HEALTH_RE.as_slice()),
        ("sensitive_minor", MINOR, MINOR_RE.as_slice()),
        ("sensitive_social", SOCIAL, SOCIAL_RE.as_slice()),
        ("sensitive_race", RACE, RACE_RE.as_slice()),
        ("sensitive_gender", GENDER, GENDER_RE.as_slice()),
    ] {
        if compiled.len() != raw.len() {
            failed.push(name);
        }
    }
    failed
}

/// Sensitive-topic spans, gated on the presence of another identifier.
pub fn scan_sensitive(text: &str, has_identifier: bool) -> Vec<MatchSpan> {
    if !has_identifier {
        return Vec::new();
    }
    let mut spans = Vec::new();
    for (category, regexes) in keyword_tables() {
        for re in regexes {
            for m in re.find_iter(text) {
                spans.push(MatchSpan::new(m.start(), m.end(), category));
            }
        }
    }
    spans
}
