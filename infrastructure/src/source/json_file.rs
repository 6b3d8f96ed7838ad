//! JSON file experiment source
//!
//! Reads an experiment snapshot from disk. When the file is missing or
//! unreadable and fallback is enabled, the bundled sample is returned
//! instead. A file that exists but does not parse is always an error.

use super::sample::sample_experiment;
use async_trait::async_trait;
use judging_application::{ExperimentSource, SourceError};
use judging_domain::Experiment;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Experiment source backed by a JSON snapshot file
#[derive(Debug, Clone)]
pub struct JsonExperimentSource {
    path: Option<PathBuf>,
    use_sample_fallback: bool,
}

impl JsonExperimentSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            use_sample_fallback: true,
        }
    }

    /// Enable or disable falling back to the bundled sample.
    pub fn with_sample_fallback(mut self, enabled: bool) -> Self {
        self.use_sample_fallback = enabled;
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn fallback(&self, reason: SourceError) -> Result<Experiment, SourceError> {
        if self.use_sample_fallback {
            warn!("{}; using bundled sample experiment", reason);
            sample_experiment()
        } else {
            Err(reason)
        }
    }
}

#[async_trait]
impl ExperimentSource for JsonExperimentSource {
    async fn load(&self) -> Result<Experiment, SourceError> {
        let Some(path) = &self.path else {
            return self.fallback(SourceError::NotFound(
                "no experiment data path configured".to_string(),
            ));
        };

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return self.fallback(SourceError::NotFound(path.display().to_string()));
            }
            Err(e) => {
                return self.fallback(SourceError::Io(format!("{}: {}", path.display(), e)));
            }
        };

        debug!("Read {} bytes from {}", content.len(), path.display());

        serde_json::from_str(&content)
            .map_err(|e| SourceError::Parse(format!("{}: {}", path.display(), e)))
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(path) if self.use_sample_fallback => {
                format!("{} (falls back to bundled sample)", path.display())
            }
            Some(path) => path.display().to_string(),
            None => "bundled sample experiment".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SNAPSHOT: &str = r#"{
        "id": "exp-7",
        "name": "Chat tone",
        "config": {"querySetSelection": "Ad hoc query", "allowAnyoneToJudge": true},
        "members": [{"id": "j1", "name": "Ana", "role": "owner"}],
        "queries": [{"id": "q1", "text": "hello"}]
    }"#;

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("experiment.json");
        fs::write(&path, SNAPSHOT).unwrap();

        let source = JsonExperimentSource::new(Some(path));
        let experiment = source.load().await.unwrap();
        assert_eq!(experiment.id, "exp-7");
        assert_eq!(experiment.queries.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_sample() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonExperimentSource::new(Some(dir.path().join("missing.json")));
        let experiment = source.load().await.unwrap();
        assert_eq!(experiment.id, "exp-search-ranking-v3");
    }

    #[tokio::test]
    async fn test_missing_file_without_fallback_errors() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonExperimentSource::new(Some(dir.path().join("missing.json")))
            .with_sample_fallback(false);
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_parse_error_is_not_masked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let source = JsonExperimentSource::new(Some(path));
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[tokio::test]
    async fn test_no_path_uses_sample() {
        let source = JsonExperimentSource::new(None);
        assert!(source.load().await.is_ok());
        assert_eq!(source.describe(), "bundled sample experiment");

        let strict = JsonExperimentSource::new(None).with_sample_fallback(false);
        assert!(strict.load().await.is_err());
    }
}
