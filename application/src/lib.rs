//! Application layer for sbs-judge
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    audit_logger::{AuditEvent, AuditLogger, NoAuditLogger},
    experiment_source::{ExperimentSource, SourceError, StaticExperimentSource},
};
pub use use_cases::bulk_assign::{
    BulkAssignError, BulkAssignInput, BulkAssignOutput, BulkAssignUseCase,
};
pub use use_cases::label_queries::{LabelQueriesOutput, LabelQueriesUseCase, QueryRow};
pub use use_cases::load_experiment::{
    LoadExperimentError, LoadExperimentUseCase, LoadedExperiment,
};
pub use use_cases::plan_assignment::{
    AssignmentPlan, PlanAssignmentError, PlanAssignmentUseCase,
};
