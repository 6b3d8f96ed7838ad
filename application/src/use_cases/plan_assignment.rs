//! Plan Assignment use case
//!
//! Builds the data behind the assignment picker: which judges already hold
//! the selected queries, and how the roster splits into assignable and
//! fully conflicted judges.

use judging_domain::{
    DomainError, Experiment, JudgePartition, JudgeStatusMap, QueryId,
    compute_judge_assignment_status, distinct_selection, partition_judges,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while planning an assignment
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlanAssignmentError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Assignment picker data for a query selection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPlan {
    pub selected_queries: Vec<QueryId>,
    /// Selected IDs not present in the experiment; they contribute no conflicts
    pub unknown_queries: Vec<QueryId>,
    pub status_map: JudgeStatusMap,
    pub partition: JudgePartition,
}

/// Use case for planning a bulk assignment
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanAssignmentUseCase;

impl PlanAssignmentUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        experiment: &Experiment,
        selected_queries: &[QueryId],
    ) -> Result<AssignmentPlan, PlanAssignmentError> {
        let status_map = compute_judge_assignment_status(selected_queries, experiment);
        let partition = partition_judges(&experiment.members, selected_queries, &status_map)?;

        let unknown_queries: Vec<QueryId> = distinct_selection(selected_queries)
            .into_iter()
            .filter(|id| experiment.query(id).is_none())
            .cloned()
            .collect();
        if !unknown_queries.is_empty() {
            warn!(
                "Ignoring {} selected queries not in experiment '{}'",
                unknown_queries.len(),
                experiment.id
            );
        }

        debug!(
            "Assignment plan: {} assignable ({} partially conflicted), {} fully conflicted",
            partition.assignable.len(),
            partition.partially_conflicted().count(),
            partition.fully_conflicted.len()
        );

        Ok(AssignmentPlan {
            selected_queries: selected_queries.to_vec(),
            unknown_queries,
            status_map,
            partition,
        })
    }
}
