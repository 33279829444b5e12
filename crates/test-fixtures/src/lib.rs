//! Fixture loader for Tarja golden datasets.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One record of the golden citizen-request dataset, paired with the
/// outcome the engine must produce for it.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenRequest {
    pub id: String,
    pub text: String,
    pub expected: GoldenExpectation,
}

/// Expected detection outcome, with category counts keyed by wire name.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    #[serde(default)]
    pub category_counts: BTreeMap<String, u32>,
    #[serde(default)]
    pub invalid_counts: BTreeMap<String, u32>,
    pub has_identifier: bool,
    pub risk_level: String,
    /// Substrings the redacted output must still contain.
    #[serde(default)]
    pub redacted_contains: Vec<String>,
    /// Substrings that must be gone from the redacted output.
    #[serde(default)]
    pub redacted_omits: Vec<String>,
}

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to the root.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("crates/test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find crates/test-fixtures from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("crates/test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load the golden citizen-request dataset.
pub fn load_golden_requests() -> Vec<GoldenRequest> {
    load_fixture("golden/requests.json")
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}
