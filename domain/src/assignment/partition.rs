//! Roster partitioning for the assignment picker

use super::conflict::{JudgeStatusMap, distinct_selection};
use crate::core::error::DomainError;
use crate::experiment::{Judge, QueryId};
use serde::{Deserialize, Serialize};

/// A judge that can still receive at least one of the selected queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeCandidate {
    pub judge: Judge,
    /// Selected queries the judge already holds
    pub conflict_count: usize,
    /// Holds some, but not all, of the selected queries
    pub is_partially_conflicted: bool,
}

/// Roster split by conflict state, in roster order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgePartition {
    pub assignable: Vec<JudgeCandidate>,
    /// Judges already assigned to every selected query
    pub fully_conflicted: Vec<Judge>,
}

impl JudgePartition {
    pub fn partially_conflicted(&self) -> impl Iterator<Item = &JudgeCandidate> {
        self.assignable.iter().filter(|c| c.is_partially_conflicted)
    }

    pub fn has_assignable(&self) -> bool {
        !self.assignable.is_empty()
    }
}

/// Split the roster into assignable and fully conflicted judges
///
/// A judge is fully conflicted when they already hold every selected query.
/// Everyone else stays assignable; those holding some of the selection are
/// flagged so the caller can warn about skipped duplicates.
///
/// Returns [`DomainError::EmptySelection`] when no query is selected.
pub fn partition_judges(
    roster: &[Judge],
    selected_query_ids: &[QueryId],
    status_map: &JudgeStatusMap,
) -> Result<JudgePartition, DomainError> {
    let selection_size = distinct_selection(selected_query_ids).len();
    if selection_size == 0 {
        return Err(DomainError::EmptySelection);
    }

    let mut partition = JudgePartition::default();
    for judge in roster {
        let conflict_count = status_map.conflict_count(&judge.id);
        if conflict_count == selection_size {
            partition.fully_conflicted.push(judge.clone());
        } else {
            partition.assignable.push(JudgeCandidate {
                judge: judge.clone(),
                conflict_count,
                is_partially_conflicted: conflict_count > 0,
            });
        }
    }

    Ok(partition)
}
