//! Load Experiment use case
//!
//! Fetches a snapshot through an [`ExperimentSource`] and validates it.

use crate::ports::experiment_source::{ExperimentSource, SourceError};
use judging_domain::{ConfigIssue, Experiment};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while loading an experiment
#[derive(Error, Debug)]
pub enum LoadExperimentError {
    #[error("Source error: {0}")]
    SourceError(#[from] SourceError),
}

/// A loaded snapshot with its validation issues
#[derive(Debug, Clone)]
pub struct LoadedExperiment {
    pub experiment: Experiment,
    pub issues: Vec<ConfigIssue>,
}

impl LoadedExperiment {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ConfigIssue::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues.iter().filter(|i| i.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues.iter().filter(|i| !i.is_error())
    }
}

/// Use case for loading and validating an experiment snapshot
pub struct LoadExperimentUseCase {
    source: Arc<dyn ExperimentSource>,
}

impl LoadExperimentUseCase {
    pub fn new(source: Arc<dyn ExperimentSource>) -> Self {
        Self { source }
    }

    /// Load the snapshot and collect validation issues
    ///
    /// Validation issues never fail the load; callers decide whether
    /// error-level issues should stop them.
    pub async fn execute(&self) -> Result<LoadedExperiment, LoadExperimentError> {
        debug!("Loading experiment from {}", self.source.describe());
        let experiment = self.source.load().await?;

        let issues = experiment.validate();
        for issue in &issues {
            warn!("{}", issue);
        }

        info!(
            "Loaded experiment '{}' ({} queries, {} members, {} issues)",
            experiment.id,
            experiment.queries.len(),
            experiment.members.len(),
            issues.len()
        );

        Ok(LoadedExperiment { experiment, issues })
    }
}
