//! # tarja-privacy
//!
//! Detection & redaction engine for Portuguese citizen-request text with
//! Brazilian identifier formats.
//!
//! ## Pipeline
//! Detectors run in fixed priority order over one text record:
//! 1. **Legal process** (SEI numbers): first, so long digit runs leave
//!    contention before the phone pass
//! 2. **Individual tax ID**: formatted always, bare 11-digit runs only
//!    with corroborating context; check digits validated either way
//! 3. **Person names**: recognizer entities cross-checked against name
//!    dictionaries and honorifics
//! 4. **General registry / company ID**: label-anchored registry numbers,
//!    formatted CNPJ
//! 5. **Email / address / postal code**
//! 6. **Phone**: strict area-code-shaped patterns, rejected near strict
//!    identifier labels
//! 7. **Sensitive topics**: last, and only when an identifier was found
//!
//! Candidate spans are folded through a single append-only mask index set;
//! the first detector to claim a range wins. Rendering replaces masked
//! alphanumerics with `'x'` and leaves punctuation intact.

pub mod accumulator;
pub mod checksum;
pub mod context;
pub mod engine;
pub mod names;
pub mod patterns;
pub mod redact;

pub use engine::DetectionEngine;
