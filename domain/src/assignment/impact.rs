//! Projected effect of a bulk assignment

use super::conflict::{JudgeStatusMap, distinct_selection};
use crate::core::error::DomainError;
use crate::experiment::{JudgeId, QueryId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Effect of a bulk assignment on one judge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeImpact {
    pub judge_id: JudgeId,
    pub new_assignments: usize,
    /// Selected queries the judge already holds
    pub skipped_duplicates: usize,
}

/// Effect of assigning a set of queries to a set of judges
///
/// Nothing is mutated; the caller performs the write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentImpact {
    pub total_new_assignments: usize,
    pub per_judge: Vec<JudgeImpact>,
}

impl AssignmentImpact {
    pub fn total_skipped_duplicates(&self) -> usize {
        self.per_judge.iter().map(|j| j.skipped_duplicates).sum()
    }

    pub fn for_judge(&self, judge_id: &JudgeId) -> Option<&JudgeImpact> {
        self.per_judge.iter().find(|j| &j.judge_id == judge_id)
    }

    /// Whether the assignment would change anything at all
    pub fn is_no_op(&self) -> bool {
        self.total_new_assignments == 0
    }
}

/// Compute new and skipped assignment counts for a bulk assignment
///
/// Judges keep the order they were selected in; selecting a judge twice
/// counts once.
///
/// # Example
///
/// ```
/// use judging_domain::assignment::{compute_assignment_impact, JudgeStatusMap};
/// use judging_domain::experiment::{JudgeId, QueryId};
///
/// let queries = [QueryId::from("q1"), QueryId::from("q2")];
/// let impact =
///     compute_assignment_impact(&[JudgeId::from("a")], &queries, &JudgeStatusMap::default())
///         .unwrap();
/// assert_eq!(impact.total_new_assignments, 2);
/// ```
pub fn compute_assignment_impact(
    selected_judge_ids: &[JudgeId],
    selected_query_ids: &[QueryId],
    status_map: &JudgeStatusMap,
) -> Result<AssignmentImpact, DomainError> {
    let selection_size = distinct_selection(selected_query_ids).len();
    if selection_size == 0 {
        return Err(DomainError::EmptySelection);
    }
    if selected_judge_ids.is_empty() {
        return Err(DomainError::NoJudgesSelected);
    }

    let mut seen = BTreeSet::new();
    let per_judge: Vec<JudgeImpact> = selected_judge_ids
        .iter()
        .filter(|id| seen.insert(*id))
        .map(|judge_id| {
            let skipped_duplicates = status_map.conflict_count(judge_id).min(selection_size);
            JudgeImpact {
                judge_id: judge_id.clone(),
                new_assignments: selection_size - skipped_duplicates,
                skipped_duplicates,
            }
        })
        .collect();

    Ok(AssignmentImpact {
        total_new_assignments: per_judge.iter().map(|j| j.new_assignments).sum(),
        per_judge,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::conflict::compute_judge_assignment_status;
    use crate::experiment::{Assignment, Query};
    use chrono::Utc;

    fn judges(raw: &[&str]) -> Vec<JudgeId> {
        raw.iter().map(|s| JudgeId::from(*s)).collect()
    }

    fn queries(raw: &[&str]) -> Vec<QueryId> {
        raw.iter().map(|s| QueryId::from(*s)).collect()
    }

    #[test]
    fn test_partial_overlap_skips_duplicates() {
        let now = Utc::now();
        let data = vec![
            Query::new("Q1", "one").with_assignment(Assignment::new("A", "A", now)),
            Query::new("Q2", "two"),
        ];
        let selected = queries(&["Q1", "Q2"]);
        let map = compute_judge_assignment_status(&selected, &data);
        let impact = compute_assignment_impact(&judges(&["A"]), &selected, &map).unwrap();

        let a = impact.for_judge(&JudgeId::from("A")).unwrap();
        assert_eq!(a.new_assignments, 1);
        assert_eq!(a.skipped_duplicates, 1);
        assert_eq!(impact.total_new_assignments, 1);
    }

    #[test]
    fn test_totals_across_judges() {
        let now = Utc::now();
        let data = vec![
            Query::new("Q1", "one")
                .with_assignment(Assignment::new("A", "A", now))
                .with_assignment(Assignment::new("B", "B", now)),
            Query::new("Q2", "two").with_assignment(Assignment::new("A", "A", now)),
            Query::new("Q3", "three"),
        ];
        let selected = queries(&["Q1", "Q2", "Q3"]);
        let map = compute_judge_assignment_status(&selected, &data);
        let impact = compute_assignment_impact(&judges(&["A", "B", "C"]), &selected, &map).unwrap();

        let counts: Vec<_> = impact
            .per_judge
            .iter()
            .map(|j| (j.judge_id.as_str(), j.new_assignments, j.skipped_duplicates))
            .collect();
        assert_eq!(counts, vec![("A", 1, 2), ("B", 2, 1), ("C", 3, 0)]);
        assert_eq!(impact.total_new_assignments, 6);
        assert_eq!(impact.total_skipped_duplicates(), 3);

        for judge in &impact.per_judge {
            assert_eq!(judge.new_assignments + judge.skipped_duplicates, selected.len());
        }
    }

    #[test]
    fn test_fully_conflicted_judge_is_no_op() {
        let now = Utc::now();
        let data = vec![Query::new("Q1", "one").with_assignment(Assignment::new("A", "A", now))];
        let selected = queries(&["Q1"]);
        let map = compute_judge_assignment_status(&selected, &data);
        let impact = compute_assignment_impact(&judges(&["A"]), &selected, &map).unwrap();
        assert!(impact.is_no_op());
    }

    #[test]
    fn test_repeated_judge_counts_once() {
        let selected = queries(&["Q1", "Q2"]);
        let impact =
            compute_assignment_impact(&judges(&["A", "A"]), &selected, &JudgeStatusMap::default())
                .unwrap();
        assert_eq!(impact.per_judge.len(), 1);
        assert_eq!(impact.total_new_assignments, 2);
    }

    #[test]
    fn test_empty_selections_are_invalid() {
        let map = JudgeStatusMap::default();
        assert_eq!(
            compute_assignment_impact(&judges(&["A"]), &[], &map),
            Err(DomainError::EmptySelection)
        );
        assert_eq!(
            compute_assignment_impact(&[], &queries(&["Q1"]), &map),
            Err(DomainError::NoJudgesSelected)
        );
    }
}
