//! Per-judge conflict computation over a query selection

use super::lookup::QueryLookup;
use crate::experiment::{JudgeId, QueryId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Selected queries a judge already holds
///
/// `conflict_count` always equals `assigned_queries.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeAssignmentStatus {
    pub assigned_queries: BTreeSet<QueryId>,
    pub conflict_count: usize,
}

impl JudgeAssignmentStatus {
    fn record(&mut self, query_id: &QueryId) {
        if self.assigned_queries.insert(query_id.clone()) {
            self.conflict_count += 1;
        }
    }

    pub fn holds(&self, query_id: &QueryId) -> bool {
        self.assigned_queries.contains(query_id)
    }
}

/// Conflict status keyed by judge
///
/// Only judges holding at least one selected query have an entry; everyone
/// else has a conflict count of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JudgeStatusMap {
    entries: BTreeMap<JudgeId, JudgeAssignmentStatus>,
}

impl JudgeStatusMap {
    pub fn get(&self, judge_id: &JudgeId) -> Option<&JudgeAssignmentStatus> {
        self.entries.get(judge_id)
    }

    /// Conflict count for a judge, zero when absent
    pub fn conflict_count(&self, judge_id: &JudgeId) -> usize {
        self.get(judge_id).map_or(0, |s| s.conflict_count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&JudgeId, &JudgeAssignmentStatus)> {
        self.entries.iter()
    }
}

impl FromIterator<(JudgeId, JudgeAssignmentStatus)> for JudgeStatusMap {
    fn from_iter<I: IntoIterator<Item = (JudgeId, JudgeAssignmentStatus)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Distinct IDs in a selection, in first-seen order
pub fn distinct_selection(selected: &[QueryId]) -> Vec<&QueryId> {
    let mut seen = BTreeSet::new();
    selected.iter().filter(|id| seen.insert(*id)).collect()
}

/// Compute which selected queries each judge already holds
///
/// IDs missing from `lookup` are skipped. Selecting the same ID twice
/// counts once.
///
/// # Example
///
/// ```
/// use judging_domain::assignment::compute_judge_assignment_status;
/// use judging_domain::experiment::{Assignment, JudgeId, Query, QueryId};
///
/// let now = chrono::Utc::now();
/// let queries = vec![
///     Query::new("q1", "one").with_assignment(Assignment::new("a", "Ann", now)),
///     Query::new("q2", "two").with_assignment(Assignment::new("a", "Ann", now)),
/// ];
/// let selected = [QueryId::from("q1"), QueryId::from("q2"), QueryId::from("q9")];
///
/// let map = compute_judge_assignment_status(&selected, &queries);
/// assert_eq!(map.conflict_count(&JudgeId::from("a")), 2);
/// assert_eq!(map.conflict_count(&JudgeId::from("b")), 0);
/// ```
pub fn compute_judge_assignment_status<L: QueryLookup + ?Sized>(
    selected_query_ids: &[QueryId],
    lookup: &L,
) -> JudgeStatusMap {
    let mut entries: BTreeMap<JudgeId, JudgeAssignmentStatus> = BTreeMap::new();

    for query_id in distinct_selection(selected_query_ids) {
        let Some(query) = lookup.lookup(query_id) else {
            continue;
        };
        for assignment in &query.assignments {
            entries
                .entry(assignment.judge_id.clone())
                .or_default()
                .record(query_id);
        }
    }

    JudgeStatusMap { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::{Assignment, Query};
    use chrono::Utc;

    fn ids(raw: &[&str]) -> Vec<QueryId> {
        raw.iter().map(|s| QueryId::from(*s)).collect()
    }

    fn assigned(id: &str, judges: &[&str]) -> Query {
        let now = Utc::now();
        judges.iter().fold(Query::new(id, id), |q, j| {
            q.with_assignment(Assignment::new(*j, j.to_uppercase(), now))
        })
    }

    #[test]
    fn test_fully_overlapping_judge() {
        let queries = vec![assigned("Q1", &["A"]), assigned("Q2", &["A"])];
        let map = compute_judge_assignment_status(&ids(&["Q1", "Q2"]), &queries);

        let a = map.get(&JudgeId::from("A")).unwrap();
        assert_eq!(a.conflict_count, 2);
        assert!(a.holds(&QueryId::from("Q1")));
        assert!(a.holds(&QueryId::from("Q2")));
        assert!(map.get(&JudgeId::from("B")).is_none());
    }

    #[test]
    fn test_partial_overlap() {
        let queries = vec![assigned("Q1", &["A", "B"]), assigned("Q2", &["B"])];
        let map = compute_judge_assignment_status(&ids(&["Q1", "Q2"]), &queries);

        assert_eq!(map.conflict_count(&JudgeId::from("A")), 1);
        assert_eq!(map.conflict_count(&JudgeId::from("B")), 2);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_missing_ids_are_skipped() {
        let queries = vec![assigned("Q1", &["A"])];
        let map = compute_judge_assignment_status(&ids(&["Q1", "missing"]), &queries);
        assert_eq!(map.conflict_count(&JudgeId::from("A")), 1);

        let map = compute_judge_assignment_status(&ids(&["missing"]), &queries);
        assert!(map.is_empty());
    }

    #[test]
    fn test_unselected_queries_do_not_count() {
        let queries = vec![assigned("Q1", &["A"]), assigned("Q2", &["A"])];
        let map = compute_judge_assignment_status(&ids(&["Q2"]), &queries);
        assert_eq!(map.conflict_count(&JudgeId::from("A")), 1);
    }

    #[test]
    fn test_duplicate_selection_counts_once() {
        let queries = vec![assigned("Q1", &["A"])];
        let map = compute_judge_assignment_status(&ids(&["Q1", "Q1"]), &queries);
        assert_eq!(map.conflict_count(&JudgeId::from("A")), 1);
    }

    #[test]
    fn test_duplicate_judge_on_one_query_counts_once() {
        let queries = vec![assigned("Q1", &["A", "A"])];
        let map = compute_judge_assignment_status(&ids(&["Q1"]), &queries);
        assert_eq!(map.conflict_count(&JudgeId::from("A")), 1);
    }

    #[test]
    fn test_count_matches_set_size_and_bounded_by_selection() {
        let queries = vec![
            assigned("Q1", &["A", "B", "C"]),
            assigned("Q2", &["A", "C"]),
            assigned("Q3", &["C"]),
            assigned("Q4", &[]),
        ];
        let selected = ids(&["Q1", "Q2", "Q3", "Q4", "Q5"]);
        let map = compute_judge_assignment_status(&selected, &queries);

        for (_, status) in map.iter() {
            assert_eq!(status.conflict_count, status.assigned_queries.len());
            assert!(status.conflict_count <= selected.len());
        }
        assert_eq!(map.conflict_count(&JudgeId::from("C")), 3);
    }

    #[test]
    fn test_judges_with_same_name_are_distinct() {
        let now = Utc::now();
        let queries = vec![
            Query::new("Q1", "one").with_assignment(Assignment::new("j1", "Sam", now)),
            Query::new("Q2", "two").with_assignment(Assignment::new("j2", "Sam", now)),
        ];
        let map = compute_judge_assignment_status(&ids(&["Q1", "Q2"]), &queries);
        assert_eq!(map.conflict_count(&JudgeId::from("j1")), 1);
        assert_eq!(map.conflict_count(&JudgeId::from("j2")), 1);
    }
}
