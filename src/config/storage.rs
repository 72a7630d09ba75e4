//! Storage configuration

use serde::Deserialize;

/// In-memory storage settings
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Load the demo fighters, analysis, sessions and fight history at startup
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

fn default_seed_demo_data() -> bool {
    true
}
