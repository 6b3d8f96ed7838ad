//! Experiment data configuration from TOML (`[experiment]` section)

use super::non_blank;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw experiment data configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExperimentConfig {
    /// Path to the experiment snapshot (JSON)
    pub data_path: Option<String>,
    /// Fall back to the bundled sample when the snapshot cannot be read
    pub use_sample_fallback: bool,
}

impl Default for FileExperimentConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            use_sample_fallback: true,
        }
    }
}

impl FileExperimentConfig {
    pub fn data_path(&self) -> Option<PathBuf> {
        non_blank(self.data_path.as_deref()).map(PathBuf::from)
    }
}
