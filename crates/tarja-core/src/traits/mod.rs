pub mod detector;
pub mod recognizer;

pub use detector::IDetector;
pub use recognizer::{Entity, EntityLabel, IRecognizer};
