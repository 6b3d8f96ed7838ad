//! Query status rules
//!
//! Derives a query's status from its assignments and the experiment's
//! sourcing/judging configuration. The rules are evaluated in order and the
//! first match wins:
//!
//! | Query set | Anyone may judge | Rule |
//! |-----------|------------------|------|
//! | uploaded  | no  | none assigned → Not Assigned; all completed → Completed; else In Progress |
//! | uploaded  | yes | any completed → Completed; else In Progress |
//! | ad-hoc    | any | Completed |
//! | other     | any | all completed (and some) → Completed; any completed → In Progress; else Not Assigned |
//!
//! Ad-hoc query records only exist once a judge has submitted a response,
//! so every such record is a completed judgment.

use crate::experiment::{ExperimentConfig, Query, QuerySetSelection};
use serde::{Deserialize, Serialize};

/// Derived status of a query
///
/// # Example
///
/// ```
/// use judging_domain::experiment::{Assignment, ExperimentConfig, Query};
/// use judging_domain::status::QueryStatus;
///
/// let config = ExperimentConfig::uploaded(false);
/// let query = Query::new("q1", "weather in Oslo");
/// assert_eq!(QueryStatus::derive(&query, &config), QueryStatus::NotAssigned);
///
/// let query = query.with_assignment(Assignment::new("j1", "Alice", chrono::Utc::now()));
/// assert_eq!(QueryStatus::derive(&query, &config), QueryStatus::InProgress);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryStatus {
    NotAssigned,
    InProgress,
    Completed,
}

impl QueryStatus {
    /// All statuses in display order
    pub const ALL: [QueryStatus; 3] = [
        QueryStatus::NotAssigned,
        QueryStatus::InProgress,
        QueryStatus::Completed,
    ];

    /// Derive the status of a query under an experiment config
    pub fn derive(query: &Query, config: &ExperimentConfig) -> Self {
        Self::from_counts(
            query.completed_assignments(),
            query.total_assignments(),
            config,
        )
    }

    /// Apply the status rules to pre-computed assignment counts
    pub fn from_counts(completed: usize, total: usize, config: &ExperimentConfig) -> Self {
        match (&config.query_set_selection, config.allow_anyone_to_judge) {
            (QuerySetSelection::Uploaded, false) => {
                if total == 0 {
                    QueryStatus::NotAssigned
                } else if completed == total {
                    QueryStatus::Completed
                } else {
                    QueryStatus::InProgress
                }
            }
            (QuerySetSelection::Uploaded, true) => {
                if completed == 0 {
                    QueryStatus::InProgress
                } else {
                    QueryStatus::Completed
                }
            }
            (QuerySetSelection::AdHoc, _) => QueryStatus::Completed,
            (QuerySetSelection::Other(_), _) => {
                if total > 0 && completed == total {
                    QueryStatus::Completed
                } else if completed > 0 {
                    QueryStatus::InProgress
                } else {
                    QueryStatus::NotAssigned
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryStatus::NotAssigned => "not-assigned",
            QueryStatus::InProgress => "in-progress",
            QueryStatus::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QueryStatus::NotAssigned => "Not Assigned",
            QueryStatus::InProgress => "In Progress",
            QueryStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for QueryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "not-assigned" => Ok(QueryStatus::NotAssigned),
            "in-progress" => Ok(QueryStatus::InProgress),
            "completed" => Ok(QueryStatus::Completed),
            _ => Err(format!(
                "Unknown query status: {}. Valid: not-assigned, in-progress, completed",
                s
            )),
        }
    }
}

/// Derive the status of a query under an experiment config
pub fn derive_status(query: &Query, config: &ExperimentConfig) -> QueryStatus {
    QueryStatus::derive(query, config)
}

/// Human-readable label for a status
pub fn status_display_name(status: QueryStatus) -> &'static str {
    status.display_name()
}

/// Human-readable label for a status string
///
/// Unknown strings are returned unchanged.
pub fn status_display_name_raw(raw: &str) -> &str {
    match raw.parse::<QueryStatus>() {
        Ok(status) => status.display_name(),
        Err(_) => raw,
    }
}
