//! Experiment sources
//!
//! Adapters implementing [`judging_application::ExperimentSource`].

mod json_file;
mod sample;

pub use json_file::JsonExperimentSource;
pub use sample::{SampleExperimentSource, sample_experiment};

use judging_application::ExperimentSource;
use std::path::PathBuf;
use std::sync::Arc;

/// Pick the source for the configured data path
///
/// Without a path the bundled sample is served directly, unless fallback is
/// disabled, in which case loading reports the missing path.
pub fn experiment_source(
    data_path: Option<PathBuf>,
    use_sample_fallback: bool,
) -> Arc<dyn ExperimentSource> {
    match data_path {
        None if use_sample_fallback => Arc::new(SampleExperimentSource),
        path => Arc::new(
            JsonExperimentSource::new(path).with_sample_fallback(use_sample_fallback),
        ),
    }
}
