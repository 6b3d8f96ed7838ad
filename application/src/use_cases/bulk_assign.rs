//! Bulk Assign use case
//!
//! Assigns every selected query to every selected judge, skipping pairs the
//! judge already holds so no query ever carries two assignments for the
//! same judge.

use crate::ports::audit_logger::{AuditEvent, AuditLogger, NoAuditLogger};
use chrono::{DateTime, Utc};
use judging_domain::{
    Assignment, AssignmentImpact, DomainError, Experiment, JudgeId, QueryId,
    compute_assignment_impact, compute_judge_assignment_status,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a bulk assignment
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BulkAssignError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Unknown queries: {}", .0.join(", "))]
    UnknownQueries(Vec<String>),
}

/// Input for the [`BulkAssignUseCase`]
#[derive(Debug, Clone)]
pub struct BulkAssignInput {
    pub queries: Vec<QueryId>,
    pub judges: Vec<JudgeId>,
    /// Compute the impact without touching the experiment
    pub dry_run: bool,
    /// Timestamp recorded on new assignments
    pub assigned_at: DateTime<Utc>,
}

impl BulkAssignInput {
    pub fn new(queries: Vec<QueryId>, judges: Vec<JudgeId>) -> Self {
        Self {
            queries,
            judges,
            dry_run: false,
            assigned_at: Utc::now(),
        }
    }

    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    pub fn at(mut self, assigned_at: DateTime<Utc>) -> Self {
        self.assigned_at = assigned_at;
        self
    }
}

/// Output of the [`BulkAssignUseCase`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkAssignOutput {
    pub impact: AssignmentImpact,
    /// Assignments actually written (zero on a dry run)
    pub applied: usize,
    pub dry_run: bool,
}

/// Use case for assigning queries to judges in bulk
pub struct BulkAssignUseCase {
    audit: Arc<dyn AuditLogger>,
}

impl Default for BulkAssignUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl BulkAssignUseCase {
    pub fn new() -> Self {
        Self {
            audit: Arc::new(NoAuditLogger),
        }
    }

    /// Create with an audit logger.
    pub fn with_audit_logger(mut self, audit: Arc<dyn AuditLogger>) -> Self {
        self.audit = audit;
        self
    }

    pub fn execute(
        &self,
        experiment: &mut Experiment,
        input: BulkAssignInput,
    ) -> Result<BulkAssignOutput, BulkAssignError> {
        if let Some(unknown) = input
            .judges
            .iter()
            .find(|id| experiment.member(id).is_none())
        {
            return Err(DomainError::UnknownJudge(unknown.to_string()).into());
        }

        let unknown_queries: Vec<String> = input
            .queries
            .iter()
            .filter(|id| experiment.query(id).is_none())
            .map(QueryId::to_string)
            .collect();
        if !unknown_queries.is_empty() {
            return Err(BulkAssignError::UnknownQueries(unknown_queries));
        }

        let status_map = compute_judge_assignment_status(&input.queries, &*experiment);
        let impact = compute_assignment_impact(&input.judges, &input.queries, &status_map)?;

        let applied = if input.dry_run {
            debug!(
                "Dry run: {} new assignments would be created",
                impact.total_new_assignments
            );
            0
        } else {
            Self::apply(experiment, &input, &impact)
        };

        info!(
            "Bulk assign on '{}': {} new, {} duplicates skipped{}",
            experiment.id,
            impact.total_new_assignments,
            impact.total_skipped_duplicates(),
            if input.dry_run { " (dry run)" } else { "" }
        );

        if !input.dry_run {
            self.audit.log(AuditEvent::new(
                "bulk_assign",
                serde_json::json!({
                    "experiment": experiment.id,
                    "queries": input.queries,
                    "judges": input.judges,
                    "newAssignments": impact.total_new_assignments,
                    "skippedDuplicates": impact.total_skipped_duplicates(),
                    "perJudge": impact.per_judge,
                }),
            ));
        }

        Ok(BulkAssignOutput {
            impact,
            applied,
            dry_run: input.dry_run,
        })
    }

    /// Write the non-duplicate pairs; returns the number written
    fn apply(experiment: &mut Experiment, input: &BulkAssignInput, impact: &AssignmentImpact) -> usize {
        let mut applied = 0;

        for judge_impact in impact.per_judge.iter().filter(|j| j.new_assignments > 0) {
            let judge_name = experiment
                .member(&judge_impact.judge_id)
                .map(|j| j.name.clone())
                .unwrap_or_default();

            for query_id in &input.queries {
                let Some(query) = experiment.query_mut(query_id) else {
                    continue;
                };
                if query.is_assigned_to(&judge_impact.judge_id) {
                    continue;
                }
                query.assignments.push(Assignment::new(
                    judge_impact.judge_id.clone(),
                    judge_name.clone(),
                    input.assigned_at,
                ));
                applied += 1;
            }
        }

        applied
    }
}
