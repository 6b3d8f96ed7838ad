//! Consistency checks for a loaded experiment snapshot
//!
//! The rules engine assumes well-formed data. These checks let the shell
//! report problems in a snapshot before rendering it.

use super::entities::{Experiment, JudgeRole};
use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use std::collections::HashSet;

impl Experiment {
    /// Validate the snapshot, returning all detected issues.
    ///
    /// Checks, in order:
    /// 1. Unrecognized query set selection (warning; the generic status rule applies)
    /// 2. Duplicate query IDs and roster IDs (error)
    /// 3. Roster without an owner (warning)
    /// 4. Per query: duplicate judges (error), judges missing from the
    ///    roster (warning), completion timestamps inconsistent with status
    ///    (warning)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !self.config.query_set_selection.is_recognized() {
            let value = self.config.query_set_selection.as_str().to_string();
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnknownQuerySetSelection {
                    value: value.clone(),
                },
                format!(
                    "querySetSelection: unknown value '{}', statuses use the generic rule",
                    value
                ),
            ));
        }

        let mut query_ids = HashSet::new();
        for query in &self.queries {
            if !query_ids.insert(&query.id) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::DuplicateQueryId {
                        query_id: query.id.to_string(),
                    },
                    format!("query '{}' appears more than once", query.id),
                ));
            }
        }

        let mut member_ids = HashSet::new();
        for member in &self.members {
            if !member_ids.insert(&member.id) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::DuplicateMember {
                        judge_id: member.id.to_string(),
                    },
                    format!("member '{}' appears more than once", member.id),
                ));
            }
        }

        if !self.members.is_empty() && !self.members.iter().any(|m| m.role == JudgeRole::Owner)
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingOwner,
                "experiment roster has no owner",
            ));
        }

        for query in &self.queries {
            let mut judges = HashSet::new();
            for assignment in &query.assignments {
                let code_ids = || (query.id.to_string(), assignment.judge_id.to_string());

                if !judges.insert(&assignment.judge_id) {
                    let (query_id, judge_id) = code_ids();
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::DuplicateJudgeAssignment {
                            query_id: query_id.clone(),
                            judge_id: judge_id.clone(),
                        },
                        format!(
                            "query '{}' has more than one assignment for judge '{}'",
                            query_id, judge_id
                        ),
                    ));
                }

                if !member_ids.contains(&assignment.judge_id) {
                    let (query_id, judge_id) = code_ids();
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::UnknownAssignee {
                            query_id: query_id.clone(),
                            judge_id: judge_id.clone(),
                        },
                        format!(
                            "query '{}' is assigned to '{}', who is not on the roster",
                            query_id, judge_id
                        ),
                    ));
                }

                if assignment.is_completed() != assignment.completed_at.is_some() {
                    let (query_id, judge_id) = code_ids();
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::CompletionTimestampMismatch {
                            query_id: query_id.clone(),
                            judge_id: judge_id.clone(),
                        },
                        format!(
                            "assignment of '{}' to '{}' is {} but completedAt is {}",
                            query_id,
                            judge_id,
                            assignment.status.as_str(),
                            if assignment.completed_at.is_some() {
                                "set"
                            } else {
                                "missing"
                            }
                        ),
                    ));
                }
            }
        }

        issues
    }
}
