//! Domain layer for sbs-judge
//!
//! This crate contains the rules engine behind the side-by-side judging
//! tool. It has no dependencies on infrastructure or presentation concerns,
//! and every operation is a pure function over plain data.
//!
//! # Core Concepts
//!
//! ## Query Status
//!
//! Each query row is labelled Not Assigned, In Progress or Completed from
//! its assignments and the experiment's sourcing/judging configuration
//! (see [`status::rule`]).
//!
//! ## Assignment Conflicts
//!
//! Before a bulk assignment, the roster is checked against the selected
//! queries (see [`assignment`]):
//!
//! - **Fully conflicted**: the judge already holds every selected query
//! - **Partially conflicted**: the judge holds some; duplicates are skipped
//! - **Impact**: how many new assignments each judge would actually receive

pub mod assignment;
pub mod config;
pub mod core;
pub mod experiment;
pub mod status;
pub mod util;

// Re-export commonly used types
pub use assignment::{
    AssignmentImpact, JudgeAssignmentStatus, JudgeCandidate, JudgeImpact, JudgePartition,
    JudgeStatusMap, QueryLookup, compute_assignment_impact, compute_judge_assignment_status,
    distinct_selection, partition_judges,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use experiment::{
    Assignment, AssignmentStatus, Experiment, ExperimentConfig, Judge, JudgeId, JudgeRole, Query,
    QueryId, QuerySetSelection,
};
pub use status::{
    QueryFilter, QueryStatus, StatusSummary, derive_status, status_display_name,
    status_display_name_raw,
};
