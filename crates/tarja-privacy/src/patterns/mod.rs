pub mod contact;
pub mod identifiers;
pub mod sensitive;

use regex::Regex;
use std::sync::LazyLock;

use tarja_core::models::{MatchSpan, PiiCategory};

/// A compiled detection pattern.
///
/// The regex is `None` when compilation failed at first use; such a
/// pattern simply produces no matches and is surfaced by
/// [`pattern_health`] instead of panicking.
pub struct PiiPattern {
    pub name: &'static str,
    pub category: PiiCategory,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! pii_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($regex_str).ok());
    };
}
pub(crate) use pii_pattern;

/// Collect every match of `regex` as a span of `category`.
pub fn scan(text: &str, regex: &LazyLock<Option<Regex>>, category: PiiCategory) -> Vec<MatchSpan> {
    let Some(re) = regex.as_ref() else {
        return Vec::new();
    };
    re.find_iter(text)
        .map(|m| MatchSpan::new(m.start(), m.end(), category))
        .collect()
}

/// Names of patterns that failed to compile, across every table.
pub fn pattern_health() -> Vec<&'static str> {
    let mut failed = Vec::new();
    for pat in identifiers::all_patterns()
        .iter()
        .chain(contact::all_patterns().iter())
        .chain(contact::phone_patterns().iter())
    {
        if pat.regex.is_none() {
            failed.push(pat.name);
        }
    }
    failed.extend(sensitive::pattern_failures());
    failed
}
