//! Label Queries use case
//!
//! Produces the rows of the queries table: one status per query, plus the
//! per-status tally shown on the results tab.

use judging_domain::{Experiment, QueryFilter, QueryId, QueryStatus, StatusSummary};
use serde::Serialize;
use tracing::debug;

/// One row of the queries table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRow {
    pub id: QueryId,
    pub text: String,
    pub task_type: Option<String>,
    pub status: QueryStatus,
    pub status_label: &'static str,
    pub completed_assignments: usize,
    pub total_assignments: usize,
    /// Display names of assigned judges, in assignment order
    pub judges: Vec<String>,
}

/// Output of [`LabelQueriesUseCase`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelQueriesOutput {
    pub experiment_id: String,
    pub experiment_name: String,
    pub rows: Vec<QueryRow>,
    /// Tally over every query in the experiment, not just the filtered rows
    pub summary: StatusSummary,
}

/// Use case for labelling every query with its derived status
///
/// Statuses are derived fresh on each call; nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelQueriesUseCase;

impl LabelQueriesUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, experiment: &Experiment, filter: &QueryFilter) -> LabelQueriesOutput {
        let config = &experiment.config;
        let mut summary = StatusSummary::default();
        let mut rows = Vec::new();

        for query in &experiment.queries {
            let status = QueryStatus::derive(query, config);
            summary.record(status);

            if !filter.matches(query, status) {
                continue;
            }

            rows.push(QueryRow {
                id: query.id.clone(),
                text: query.text.clone(),
                task_type: query.task_type.clone(),
                status,
                status_label: status.display_name(),
                completed_assignments: query.completed_assignments(),
                total_assignments: query.total_assignments(),
                judges: query
                    .assignments
                    .iter()
                    .map(|a| {
                        experiment
                            .member(&a.judge_id)
                            .map(|j| j.name.clone())
                            .unwrap_or_else(|| a.judge_name.clone())
                    })
                    .collect(),
            });
        }

        debug!(
            "Labelled {} of {} queries (filter active: {})",
            rows.len(),
            experiment.queries.len(),
            !filter.is_empty()
        );

        LabelQueriesOutput {
            experiment_id: experiment.id.clone(),
            experiment_name: experiment.name.clone(),
            rows,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use judging_domain::{Assignment, ExperimentConfig, Judge, JudgeRole, Query};

    fn experiment(config: ExperimentConfig) -> Experiment {
        let now = chrono::Utc::now();
        Experiment::new("e1", "Ranking", config)
            .with_member(Judge::new("a", "Alice", JudgeRole::Owner))
            .with_member(Judge::new("b", "Bob", JudgeRole::Judge))
            .with_query(
                Query::new("Q1", "weather tomorrow")
                    .with_task_type("search")
                    .with_assignment(Assignment::new("a", "Alice", now).complete(now))
                    .with_assignment(Assignment::new("b", "Bob", now).complete(now))
                    .with_assignment(Assignment::new("c", "Cara", now).complete(now)),
            )
            .with_query(
                Query::new("Q2", "write a poem")
                    .with_task_type("chat")
                    .with_assignment(Assignment::new("a", "Alice", now)),
            )
            .with_query(Query::new("Q3", "capital of peru").with_task_type("search"))
    }

    #[test]
    fn test_rows_for_uploaded_restricted() {
        let output =
            LabelQueriesUseCase::new().execute(&experiment(ExperimentConfig::uploaded(false)), &QueryFilter::default());

        let statuses: Vec<_> = output.rows.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                QueryStatus::Completed,
                QueryStatus::InProgress,
                QueryStatus::NotAssigned
            ]
        );
        assert_eq!(output.rows[0].status_label, "Completed");
        assert_eq!(output.rows[0].completed_assignments, 3);
        assert_eq!(output.summary.total(), 3);
    }

    #[test]
    fn test_judge_names_fall_back_to_assignment_name() {
        let output = LabelQueriesUseCase::new()
            .execute(&experiment(ExperimentConfig::uploaded(false)), &QueryFilter::default());
        assert_eq!(output.rows[0].judges, vec!["Alice", "Bob", "Cara"]);
    }

    #[test]
    fn test_filter_keeps_full_summary() {
        let filter = QueryFilter::default().with_task_type("search");
        let output =
            LabelQueriesUseCase::new().execute(&experiment(ExperimentConfig::uploaded(false)), &filter);

        assert_eq!(output.rows.len(), 2);
        assert_eq!(output.summary.total(), 3);
        assert_eq!(output.summary.in_progress, 1);
    }

    #[test]
    fn test_ad_hoc_rows_all_completed() {
        let output = LabelQueriesUseCase::new()
            .execute(&experiment(ExperimentConfig::ad_hoc(true)), &QueryFilter::default());
        assert!(output.rows.iter().all(|r| r.status == QueryStatus::Completed));
    }

    #[test]
    fn test_status_filter() {
        let filter = QueryFilter::default().with_status(QueryStatus::NotAssigned);
        let output =
            LabelQueriesUseCase::new().execute(&experiment(ExperimentConfig::uploaded(false)), &filter);
        assert_eq!(output.rows.len(), 1);
        assert_eq!(output.rows[0].id.as_str(), "Q3");
    }
}
