//! Experiment domain entities

use super::config::ExperimentConfig;
use super::value_objects::{JudgeId, QueryId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A judge's progress on one assigned query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AssignmentStatus::NotStarted => "not-started",
            AssignmentStatus::InProgress => "in-progress",
            AssignmentStatus::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            AssignmentStatus::NotStarted => "Not Started",
            AssignmentStatus::InProgress => "In Progress",
            AssignmentStatus::Completed => "Completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, AssignmentStatus::Completed)
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Pairing of a query with a judge
///
/// `completed_at` is only meaningful when `status` is
/// [`AssignmentStatus::Completed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub judge_id: JudgeId,
    /// Judge display name at the time of assignment
    #[serde(default)]
    pub judge_name: String,
    #[serde(default)]
    pub status: AssignmentStatus,
    pub assigned_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Assignment {
    /// Create a not-started assignment
    pub fn new(
        judge_id: impl Into<JudgeId>,
        judge_name: impl Into<String>,
        assigned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            judge_id: judge_id.into(),
            judge_name: judge_name.into(),
            status: AssignmentStatus::NotStarted,
            assigned_at,
            completed_at: None,
        }
    }

    pub fn start(mut self) -> Self {
        self.status = AssignmentStatus::InProgress;
        self.completed_at = None;
        self
    }

    pub fn complete(mut self, completed_at: DateTime<Utc>) -> Self {
        self.status = AssignmentStatus::Completed;
        self.completed_at = Some(completed_at);
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

/// A unit of work to be judged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub id: QueryId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Query {
    pub fn new(id: impl Into<QueryId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            task_type: None,
            assignments: Vec::new(),
        }
    }

    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }

    pub fn with_assignment(mut self, assignment: Assignment) -> Self {
        self.assignments.push(assignment);
        self
    }

    pub fn total_assignments(&self) -> usize {
        self.assignments.len()
    }

    pub fn completed_assignments(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_completed()).count()
    }

    /// Find the assignment held by a judge, if any
    pub fn assignment_for(&self, judge_id: &JudgeId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| &a.judge_id == judge_id)
    }

    pub fn is_assigned_to(&self, judge_id: &JudgeId) -> bool {
        self.assignment_for(judge_id).is_some()
    }
}

/// Role of a member on the experiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum JudgeRole {
    Owner,
    CoOwner,
    #[default]
    Judge,
}

impl JudgeRole {
    pub fn as_str(&self) -> &str {
        match self {
            JudgeRole::Owner => "owner",
            JudgeRole::CoOwner => "co-owner",
            JudgeRole::Judge => "judge",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            JudgeRole::Owner => "Owner",
            JudgeRole::CoOwner => "Co-owner",
            JudgeRole::Judge => "Judge",
        }
    }

    /// Owners and co-owners may manage queries and members
    pub fn can_manage(&self) -> bool {
        matches!(self, JudgeRole::Owner | JudgeRole::CoOwner)
    }
}

impl std::fmt::Display for JudgeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A member of the experiment roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judge {
    pub id: JudgeId,
    pub name: String,
    #[serde(default)]
    pub role: JudgeRole,
}

impl Judge {
    pub fn new(id: impl Into<JudgeId>, name: impl Into<String>, role: JudgeRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }
}

/// An experiment snapshot: config, queries and roster
///
/// Passed explicitly into every use case; there is no process-wide
/// current experiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub config: ExperimentConfig,
    #[serde(default)]
    pub queries: Vec<Query>,
    #[serde(default)]
    pub members: Vec<Judge>,
}

impl Experiment {
    pub fn new(id: impl Into<String>, name: impl Into<String>, config: ExperimentConfig) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            config,
            queries: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.queries.push(query);
        self
    }

    pub fn with_member(mut self, judge: Judge) -> Self {
        self.members.push(judge);
        self
    }

    pub fn query(&self, id: &QueryId) -> Option<&Query> {
        self.queries.iter().find(|q| &q.id == id)
    }

    pub fn query_mut(&mut self, id: &QueryId) -> Option<&mut Query> {
        self.queries.iter_mut().find(|q| &q.id == id)
    }

    pub fn member(&self, id: &JudgeId) -> Option<&Judge> {
        self.members.iter().find(|j| &j.id == id)
    }

    /// Distinct task types in query order
    pub fn task_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for task_type in self.queries.iter().filter_map(|q| q.task_type.as_deref()) {
            if !types.contains(&task_type) {
                types.push(task_type);
            }
        }
        types
    }
}
