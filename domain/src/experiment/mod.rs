//! Experiment data model
//!
//! Plain data handed to the rules engine by the shell: queries with their
//! nested assignments, the judge roster and the experiment configuration.

pub mod config;
pub mod entities;
pub mod validation;
pub mod value_objects;

pub use config::{ExperimentConfig, QuerySetSelection};
pub use entities::{Assignment, AssignmentStatus, Experiment, Judge, JudgeRole, Query};
pub use value_objects::{JudgeId, QueryId};
