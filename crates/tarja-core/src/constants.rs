/// Tarja engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder character emitted for masked alphanumeric characters.
pub const MASK_CHAR: char = 'x';

/// Context window (bytes each side) for corroborating a bare tax-ID run.
pub const TAX_ID_CONTEXT_WINDOW: usize = 50;

/// Context window (bytes each side) for disqualifying a phone-shaped match
/// that sits next to a strict identifier label.
pub const PHONE_CONTEXT_WINDOW: usize = 30;

/// Maximum distance (bytes) between an honorific and the start of a
/// person-entity span for the honorific to vouch for it.
pub const HONORIFIC_LOOKBEHIND: usize = 5;

/// Minimum whitespace-separated tokens for a person entity to be considered.
pub const MIN_NAME_TOKENS: usize = 2;

/// Share of critical-bearing records above which a corpus is escalated
/// to critical regardless of per-record labels.
pub const CORPUS_CRITICAL_PROPORTION: f64 = 0.10;
