use crate::errors::TarjaResult;
use crate::models::DetectionResult;

/// PII detection and redaction over a single text record.
///
/// Stateless across invocations; implementations are shareable between
/// worker threads without locking.
pub trait IDetector: Send + Sync {
    /// Locate PII spans, mask the text and count per-category hits.
    ///
    /// Under normal operation this never fails: detector conflicts,
    /// checksum mismatches and recognizer errors are all absorbed into
    /// the result.
    fn detect_and_redact(&self, text: &str) -> TarjaResult<DetectionResult>;
}
