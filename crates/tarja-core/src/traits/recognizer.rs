use serde::{Deserialize, Serialize};

use crate::errors::TarjaResult;

/// Semantic label assigned to a span by the external recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Location,
    Organization,
    Misc,
}

impl EntityLabel {
    /// Map the tag conventions of common NER models onto the closed set.
    pub fn parse(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "PER" | "PERSON" => EntityLabel::Person,
            "LOC" | "LOCATION" | "GPE" => EntityLabel::Location,
            "ORG" | "ORGANIZATION" => EntityLabel::Organization,
            _ => EntityLabel::Misc,
        }
    }
}

/// A labeled span emitted by the named-entity recognizer.
///
/// Offsets are byte offsets into the text handed to `recognize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub start: usize,
    pub end: usize,
    pub label: EntityLabel,
    pub text: String,
}

/// Named-entity recognition as an injected capability.
///
/// The statistical model behind this trait is external to the engine; any
/// `Err` it returns is caught inside the engine and treated as "no
/// entities found", so NLP-based detection degrades gracefully to zero
/// contribution instead of aborting the record.
pub trait IRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> TarjaResult<Vec<Entity>>;
}
