//! Person-name filter over recognizer entities.
//!
//! The recognizer alone has too high a false-positive rate on generic
//! capitalized phrases; the dictionary + honorific cross-check is the
//! precision gate. Reference sets come from IBGE most-common name data.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use tarja_core::constants::{HONORIFIC_LOOKBEHIND, MIN_NAME_TOKENS};
use tarja_core::models::{MatchSpan, PiiCategory};
use tarja_core::traits::{Entity, EntityLabel};

const FIRST_NAMES: &[&str] = &[
    "maria", "joao", "ana", "carlos", "paulo", "jose", "lucas", "pedro", "marcos", "luiz",
    "gabriel", "rafael", "francisco", "marcelo", "bruno", "felipe", "guilherme", "rodrigo",
    "antonio", "mateus", "andre", "fernando", "fabio", "leonardo", "gustavo", "juliana",
    "patricia", "aline", "camila", "bruna", "jessica", "leticia", "julia", "luciana", "amanda",
    "mariana", "vanessa", "alice", "beatriz", "larissa", "debora", "claudia", "carol", "carolina",
    "sandra", "regina", "roberta", "edson", "sergio", "vitor", "thiago", "alexandre", "eduardo",
    "daniel", "renato", "ricardo", "jorge", "samuel", "diego", "leandro", "tiago", "anderson",
    "claudio", "marcio", "mauro", "roberto", "wellington", "wallace", "robson", "cristiano",
    "geraldo", "raimundo", "sebastiao", "miguel", "arthur", "heitor", "bernardo", "davi", "theo",
    "lorenzo", "gael", "bento", "helena", "laura", "sophia", "manuela", "maite", "liz", "cecilia",
    "elisa", "maitê", "eloá",
];

const SURNAMES: &[&str] = &[
    "silva", "santos", "oliveira", "souza", "rodrigues", "ferreira", "alves", "pereira", "lima",
    "gomes", "costa", "ribeiro", "martins", "carvalho", "almeida", "lopes", "soares", "fernandes",
    "vieira", "barbosa", "rocha", "dias", "nascimento", "andrade", "moreira", "nunes", "marques",
    "machado", "mendes", "freitas", "cardoso", "ramos", "goncalves", "santana", "teixeira",
    "cavalcanti", "moura", "campos", "jesus", "pinto", "araujo", "leite", "barros", "farias",
    "cunha", "reis", "siqueira", "moraes", "castro", "batista", "neves", "rosa", "medeiros",
    "dantas", "conceicao", "braga", "filho", "neto", "junior", "sobrinho", "mota", "vasconcelos",
    "cruz", "viana", "peixoto", "maia", "monteiro", "coelho", "correia", "brito",
];

// Corporate-name suffixes that disqualify a span outright. Tokens are
// compared after normalization, so "S/A" and "S.A." both arrive as "sa".
const ORG_SUFFIXES: &[&str] = &["ltda", "advogados", "associados", "eireli", "sa", "me"];

static FIRST_NAME_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FIRST_NAMES.iter().copied().collect());
static SURNAME_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SURNAMES.iter().copied().collect());

static HONORIFIC_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:dr|dra|sr|sra)\.?\s").ok());

/// Lowercase and strip punctuation, keeping letters, digits and spaces.
fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Whether an honorific (Dr., Sr., Sra., ...) immediately precedes the
/// span start.
fn has_honorific(text: &str, span_start: usize) -> bool {
    let Some(re) = HONORIFIC_RE.as_ref() else {
        return false;
    };
    let mut window_start = span_start.saturating_sub(HONORIFIC_LOOKBEHIND);
    while window_start > 0 && !text.is_char_boundary(window_start) {
        window_start -= 1;
    }
    re.is_match(&text[window_start..span_start])
}

/// Cross-validate recognizer entities into person-name spans.
///
/// Only PERSON spans with at least two tokens pass; a span must carry a
/// dictionary name/surname or a preceding honorific, and must not look
/// like a corporate name.
pub fn filter_person_entities(text: &str, entities: &[Entity]) -> Vec<MatchSpan> {
    let mut spans = Vec::new();

    for ent in entities {
        if ent.label != EntityLabel::Person {
            continue;
        }
        // Distrust recognizer offsets: out-of-range or mid-character
        // spans are dropped rather than allowed to split the text badly.
        if ent.start >= ent.end
            || ent.end > text.len()
            || !text.is_char_boundary(ent.start)
            || !text.is_char_boundary(ent.end)
        {
            continue;
        }

        let clean = normalize(ent.text.trim());
        let parts: Vec<&str> = clean.split_whitespace().collect();
        if parts.len() < MIN_NAME_TOKENS {
            continue;
        }

        if parts.iter().any(|p| ORG_SUFFIXES.contains(p)) {
            continue;
        }

        let has_common_part = parts
            .iter()
            .any(|p| FIRST_NAME_SET.contains(p) || SURNAME_SET.contains(p));

        if has_common_part || has_honorific(text, ent.start) {
            spans.push(MatchSpan::new(ent.start, ent.end, PiiCategory::PersonName));
        }
    }

    spans
}
