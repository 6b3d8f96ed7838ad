//! Configuration file loading for sbs-judge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SBS_JUDGE_*` environment variables (`SBS_JUDGE_OUTPUT__FORMAT=json`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./sbs-judge.toml` or `./.sbs-judge.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/sbs-judge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAuditConfig, FileConfig, FileExperimentConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use loader::ConfigLoader;
