//! Output formatter trait

use judging_application::{AssignmentPlan, BulkAssignOutput, LabelQueriesOutput};
use judging_domain::{ConfigIssue, Experiment};

/// Trait for rendering command results
pub trait OutputFormatter {
    /// Format the queries table
    fn format_queries(&self, output: &LabelQueriesOutput) -> String;

    /// Format the per-status counts
    fn format_summary(&self, output: &LabelQueriesOutput) -> String;

    /// Format the assignment picker (conflicts per judge)
    fn format_plan(&self, plan: &AssignmentPlan) -> String;

    /// Format the result of a bulk assignment
    fn format_assign(&self, result: &BulkAssignOutput, experiment: &Experiment) -> String;

    /// Format snapshot validation issues
    fn format_issues(&self, issues: &[ConfigIssue]) -> String;
}
