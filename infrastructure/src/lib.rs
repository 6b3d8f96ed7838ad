//! Infrastructure layer for sbs-judge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod source;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAuditConfig, FileConfig, FileExperimentConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat,
};
pub use logging::JsonlAuditLogger;
pub use source::{
    JsonExperimentSource, SampleExperimentSource, experiment_source, sample_experiment,
};
