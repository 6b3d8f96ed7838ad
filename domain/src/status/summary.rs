//! Per-status tallies and query filtering for the results view

use super::rule::QueryStatus;
use crate::experiment::{ExperimentConfig, Query};
use serde::{Deserialize, Serialize};

/// Number of queries in each status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub not_assigned: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusSummary {
    /// Tally the statuses of a set of queries
    pub fn tally<'a>(
        queries: impl IntoIterator<Item = &'a Query>,
        config: &ExperimentConfig,
    ) -> Self {
        queries
            .into_iter()
            .map(|q| QueryStatus::derive(q, config))
            .fold(Self::default(), |mut summary, status| {
                summary.record(status);
                summary
            })
    }

    pub fn record(&mut self, status: QueryStatus) {
        match status {
            QueryStatus::NotAssigned => self.not_assigned += 1,
            QueryStatus::InProgress => self.in_progress += 1,
            QueryStatus::Completed => self.completed += 1,
        }
    }

    pub fn count(&self, status: QueryStatus) -> usize {
        match status {
            QueryStatus::NotAssigned => self.not_assigned,
            QueryStatus::InProgress => self.in_progress,
            QueryStatus::Completed => self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.not_assigned + self.in_progress + self.completed
    }

    /// Share of completed queries (0.0 to 1.0)
    pub fn completion_ratio(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.completed as f64 / self.total() as f64
        }
    }

    /// Generate a visual progress bar (e.g., "[██████░░░░]")
    pub fn progress_bar(&self, width: usize) -> String {
        let filled = (self.completion_ratio() * width as f64).round() as usize;
        let mut bar = String::from("[");
        bar.push_str(&"█".repeat(filled.min(width)));
        bar.push_str(&"░".repeat(width.saturating_sub(filled)));
        bar.push(']');
        bar
    }
}

/// Row selection for the queries table
///
/// Empty criteria match everything. Task types compare case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilter {
    pub status: Option<QueryStatus>,
    pub task_type: Option<String>,
}

impl QueryFilter {
    pub fn with_status(mut self, status: QueryStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.task_type.is_none()
    }

    /// Check a query against the filter, given its already-derived status
    pub fn matches(&self, query: &Query, status: QueryStatus) -> bool {
        if self.status.is_some_and(|wanted| wanted != status) {
            return false;
        }
        match &self.task_type {
            Some(wanted) => query
                .task_type
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(wanted)),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::Assignment;
    use chrono::Utc;

    fn sample() -> Vec<Query> {
        let now = Utc::now();
        vec![
            Query::new("q1", "a").with_task_type("search"),
            Query::new("q2", "b")
                .with_task_type("chat")
                .with_assignment(Assignment::new("j1", "Alice", now)),
            Query::new("q3", "c")
                .with_task_type("Search")
                .with_assignment(Assignment::new("j1", "Alice", now).complete(now)),
        ]
    }

    #[test]
    fn test_tally_uploaded() {
        let summary = StatusSummary::tally(&sample(), &ExperimentConfig::uploaded(false));
        assert_eq!(summary.not_assigned, 1);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_tally_ad_hoc_all_completed() {
        let summary = StatusSummary::tally(&sample(), &ExperimentConfig::ad_hoc(false));
        assert_eq!(summary.count(QueryStatus::Completed), 3);
        assert_eq!(summary.completion_ratio(), 1.0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = StatusSummary::tally(&[], &ExperimentConfig::default());
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.completion_ratio(), 0.0);
        assert_eq!(summary.progress_bar(4), "[░░░░]");
    }

    #[test]
    fn test_progress_bar() {
        let summary = StatusSummary {
            not_assigned: 1,
            in_progress: 0,
            completed: 1,
        };
        assert_eq!(summary.progress_bar(4), "[██░░]");
    }

    #[test]
    fn test_filter_by_status_and_task_type() {
        let config = ExperimentConfig::uploaded(false);
        let queries = sample();
        let filter = QueryFilter::default().with_task_type("search");
        let matched: Vec<_> = queries
            .iter()
            .filter(|q| filter.matches(q, QueryStatus::derive(q, &config)))
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(matched, vec!["q1", "q3"]);

        let filter = filter.with_status(QueryStatus::Completed);
        let matched: Vec<_> = queries
            .iter()
            .filter(|q| filter.matches(q, QueryStatus::derive(q, &config)))
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(matched, vec!["q3"]);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = QueryFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&Query::new("q", "t"), QueryStatus::NotAssigned));
    }
}
