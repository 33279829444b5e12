pub mod category;
pub mod corpus;
pub mod detection;
pub mod risk;
pub mod span;

pub use category::{PiiCategory, Severity};
pub use corpus::CorpusStatistics;
pub use detection::DetectionResult;
pub use risk::{RiskClassification, RiskLevel};
pub use span::{MaskIndexSet, MatchSpan};
