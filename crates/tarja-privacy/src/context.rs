//! Context-window scanning around candidate matches.
//!
//! Two opposite uses: corroborating a bare 11-digit run as a tax ID, and
//! disqualifying a phone-shaped match that sits next to a strict
//! identifier label (those are usually malformatted registry numbers).

use regex::Regex;
use std::sync::LazyLock;

use tarja_core::constants::{PHONE_CONTEXT_WINDOW, TAX_ID_CONTEXT_WINDOW};

const TAX_ID_KEYWORDS: &[&str] = &[
    r"cpf",
    r"cadastro de pessoa f[íi]sica",
    r"inscri[çc][ãa]o",
    r"inscrito no cpf",
    r"cpf n[úu]mero",
    r"cpf sob o n[úu]mero",
    r"portador do cpf",
    r"titular do cpf",
    r"contribuinte",
    r"documento cpf",
    r"cadastro cpf",
];

// Only identifier labels that are NOT phones: phone words (tel, contato,
// ...) must stay out so "Contato: (11) 98765-4321" survives.
const STRICT_ID_KEYWORDS: &[&str] = &[
    r"\bcpf\b",
    r"\bcnpj\b",
    r"\brg\b",
    r"\bcnh\b",
    r"\bnis\b",
    r"\bpis\b",
    r"\bpasep\b",
    r"\bnit\b",
    r"\bctps\b",
    r"\bmatr[íi]cula\b",
    r"\bt[íi]tulo\s+eleitor\b",
    r"\binscri[çc][ãa]o\b",
    r"\bidentidade\b",
    r"\bdocumento\s+(?:de\s+)?identidade\b",
];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|p| Regex::new(&format!("(?i){p}")).ok())
        .collect()
}

static TAX_ID_RE: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(TAX_ID_KEYWORDS));
static STRICT_ID_RE: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(STRICT_ID_KEYWORDS));

/// Slice `window` bytes each side of `position`, clamped to char
/// boundaries so multi-byte text never splits a character.
fn window_around(text: &str, position: usize, window: usize) -> &str {
    let mut start = position.saturating_sub(window);
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (position + window).min(text.len());
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}

/// Whether any keyword in `keywords` occurs within `window` bytes of
/// `position`.
pub fn has_context(text: &str, position: usize, window: usize, keywords: &[Regex]) -> bool {
    let ctx = window_around(text, position, window);
    keywords.iter().any(|re| re.is_match(ctx))
}

/// Tax-ID corroboration for bare 11-digit runs (formatted IDs never need
/// this).
pub fn has_tax_id_context(text: &str, position: usize) -> bool {
    has_context(text, position, TAX_ID_CONTEXT_WINDOW, &TAX_ID_RE)
}

/// Strict-identifier disqualification for phone-shaped matches.
pub fn is_near_strict_identifier(text: &str, position: usize) -> bool {
    has_context(text, position, PHONE_CONTEXT_WINDOW, &STRICT_ID_RE)
}
