//! Structured configuration and snapshot issues.
//!
//! Loading code reports problems as [`ConfigIssue`]s instead of failing, so
//! the shell can print every issue at once and decide whether to continue.
//! Only [`Severity::Error`] issues should stop a run.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the data cannot be used as-is.
    Error,
    /// Non-fatal: the data works but may not behave as expected.
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A path field is set to an empty string.
    EmptyPath { field: String },
    /// The query set selection is not one the status rules know.
    UnknownQuerySetSelection { value: String },
    /// Two queries share an ID.
    DuplicateQueryId { query_id: String },
    /// Two roster entries share an ID.
    DuplicateMember { judge_id: String },
    /// A query holds more than one assignment for the same judge.
    DuplicateJudgeAssignment { query_id: String, judge_id: String },
    /// An assignment references a judge missing from the roster.
    UnknownAssignee { query_id: String, judge_id: String },
    /// `completedAt` is set on an unfinished assignment, or missing on a
    /// completed one.
    CompletionTimestampMismatch { query_id: String, judge_id: String },
    /// The roster has no owner.
    MissingOwner,
}

/// A detected issue in configuration or experiment data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity.as_str(), self.message)
    }
}
