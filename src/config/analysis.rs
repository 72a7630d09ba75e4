//! Analysis configuration

use serde::Deserialize;

/// Scoring heuristic settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfig {
    /// Fixed seed for the random source. When unset, scores draw from
    /// thread-local entropy and differ between runs.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl AnalysisConfig {
    pub fn is_deterministic(&self) -> bool {
        self.random_seed.is_some()
    }
}
