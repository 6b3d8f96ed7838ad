//! Bundled sample experiment
//!
//! Stands in for real data when no snapshot file is available.

use async_trait::async_trait;
use judging_application::{ExperimentSource, SourceError};
use judging_domain::Experiment;

const SAMPLE_EXPERIMENT: &str = include_str!("../../data/sample_experiment.json");

/// Parse the bundled sample experiment
pub fn sample_experiment() -> Result<Experiment, SourceError> {
    serde_json::from_str(SAMPLE_EXPERIMENT)
        .map_err(|e| SourceError::Parse(format!("bundled sample: {}", e)))
}

/// Source that always returns the bundled sample
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleExperimentSource;

#[async_trait]
impl ExperimentSource for SampleExperimentSource {
    async fn load(&self) -> Result<Experiment, SourceError> {
        sample_experiment()
    }

    fn describe(&self) -> String {
        "bundled sample experiment".to_string()
    }
}
