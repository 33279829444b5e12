//! First-claim-wins span bookkeeping.

use std::collections::BTreeMap;

use tarja_core::models::{MaskIndexSet, MatchSpan, PiiCategory};

/// Accumulates claimed spans across the detector pipeline.
///
/// Detectors run in fixed priority order and feed their spans here; a
/// span that overlaps any previously claimed byte is dropped, so earlier
/// detectors always keep the territory they claimed.
#[derive(Debug, Default)]
pub struct SpanAccumulator {
    mask: MaskIndexSet,
    category_counts: BTreeMap<PiiCategory, u32>,
    invalid_counts: BTreeMap<PiiCategory, u32>,
    has_identifier: bool,
}

impl SpanAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to claim one span. Returns true if the span was accepted.
    ///
    /// Invalid spans (failed checksum) are counted and masked like valid
    /// ones, but do not mark the record as carrying an identifier.
    pub fn claim(&mut self, span: MatchSpan) -> bool {
        if span.is_empty() {
            return false;
        }
        if self.mask.intersects(span.start, span.end) {
            return false;
        }

        self.mask.insert_span(span.start, span.end);
        *self.category_counts.entry(span.category).or_insert(0) += 1;

        if span.valid {
            if span.category.is_identifier() {
                self.has_identifier = true;
            }
        } else {
            *self.invalid_counts.entry(span.category).or_insert(0) += 1;
        }
        true
    }

    /// Claim every span in `spans`, in order.
    pub fn claim_all(&mut self, spans: impl IntoIterator<Item = MatchSpan>) {
        for span in spans {
            self.claim(span);
        }
    }

    pub fn has_identifier(&self) -> bool {
        self.has_identifier
    }

    pub fn mask(&self) -> &MaskIndexSet {
        &self.mask
    }

    pub fn into_parts(
        self,
    ) -> (
        MaskIndexSet,
        BTreeMap<PiiCategory, u32>,
        BTreeMap<PiiCategory, u32>,
        bool,
    ) {
        (
            self.mask,
            self.category_counts,
            self.invalid_counts,
            self.has_identifier,
        )
    }
}
