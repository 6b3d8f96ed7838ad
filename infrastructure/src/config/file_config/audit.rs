//! Audit and diagnostic log configuration (`[audit]`, `[logging]` sections)

use super::non_blank;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw audit configuration from TOML
///
/// Auditing is off unless `log_path` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuditConfig {
    /// JSONL file receiving one line per bulk assignment
    pub log_path: Option<String>,
}

impl FileAuditConfig {
    pub fn log_path(&self) -> Option<PathBuf> {
        non_blank(self.log_path.as_deref()).map(expand_home)
    }
}

/// Raw diagnostic logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write tracing output to this file instead of stderr
    pub file: Option<String>,
}

impl FileLoggingConfig {
    pub fn file(&self) -> Option<PathBuf> {
        non_blank(self.file.as_deref()).map(expand_home)
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_disabled_by_default() {
        assert!(FileAuditConfig::default().log_path().is_none());
    }

    #[test]
    fn test_expand_home() {
        let expanded = expand_home("~/audit.jsonl");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("audit.jsonl"));
        }
        assert_eq!(expand_home("/var/log/a.jsonl"), PathBuf::from("/var/log/a.jsonl"));
    }
}
