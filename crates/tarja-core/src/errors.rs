/// Engine-level errors.
///
/// Under normal operation nothing in the detection pipeline raises: bad
/// input passes through, recognizer failures degrade to zero entities,
/// checksum mismatches are recorded rather than reported. The variants
/// here exist for the trait seams and for misconfiguration at startup.
#[derive(Debug, thiserror::Error)]
pub enum TarjaError {
    #[error("recognizer error: {message}")]
    Recognizer { message: String },

    #[error("pattern '{name}' failed to compile")]
    PatternCompilation { name: &'static str },
}

pub type TarjaResult<T> = Result<T, TarjaError>;
