//! Experiment source port
//!
//! Defines how the application layer obtains an experiment snapshot.
//! Adapters (file, sample data) live in the infrastructure layer.

use async_trait::async_trait;
use judging_domain::Experiment;
use thiserror::Error;

/// Errors that can occur while loading an experiment
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Experiment data not found: {0}")]
    NotFound(String),

    #[error("Failed to read experiment data: {0}")]
    Io(String),

    #[error("Malformed experiment data: {0}")]
    Parse(String),
}

/// Source of experiment snapshots
///
/// Loading, retry and fallback policy belong to the adapter; the use cases
/// only see a fully-formed [`Experiment`].
#[async_trait]
pub trait ExperimentSource: Send + Sync {
    /// Load the experiment snapshot
    async fn load(&self) -> Result<Experiment, SourceError>;

    /// Describe where data is loaded from (for diagnostics)
    fn describe(&self) -> String;
}

/// In-memory source holding a fixed snapshot
///
/// Used by tests and by shells that already have the data in hand.
pub struct StaticExperimentSource {
    experiment: Experiment,
}

impl StaticExperimentSource {
    pub fn new(experiment: Experiment) -> Self {
        Self { experiment }
    }
}

#[async_trait]
impl ExperimentSource for StaticExperimentSource {
    async fn load(&self) -> Result<Experiment, SourceError> {
        Ok(self.experiment.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory experiment '{}'", self.experiment.id)
    }
}
