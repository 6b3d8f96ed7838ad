//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod audit;
mod experiment;
mod output;

pub use audit::{FileAuditConfig, FileLoggingConfig};
pub use experiment::FileExperimentConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use judging_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where experiment data is loaded from
    pub experiment: FileExperimentConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Audit trail settings
    pub audit: FileAuditConfig,
    /// Diagnostic log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let paths = [
            ("experiment.data_path", self.experiment.data_path.as_deref()),
            ("audit.log_path", self.audit.log_path.as_deref()),
            ("logging.file", self.logging.file.as_deref()),
        ];

        paths
            .into_iter()
            .filter(|(_, value)| value.is_some_and(|v| v.trim().is_empty()))
            .map(|(field, _)| {
                ConfigIssue::warning(
                    ConfigIssueCode::EmptyPath {
                        field: field.to_string(),
                    },
                    format!("{}: empty path, treated as unset", field),
                )
            })
            .collect()
    }
}

/// Treat blank path strings as unset
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
