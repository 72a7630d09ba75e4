//! Dashboard configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::dashboard::DEFAULT_ACCURACY_LABEL;

/// Dashboard settings
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Label reported as `aiAccuracy`; there is no measured value behind it
    #[serde(default = "default_accuracy_label")]
    pub accuracy_label: String,
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.accuracy_label.trim().is_empty() {
            return Err(ValidationError::EmptyAccuracyLabel);
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            accuracy_label: default_accuracy_label(),
        }
    }
}

fn default_accuracy_label() -> String {
    DEFAULT_ACCURACY_LABEL.to_string()
}
