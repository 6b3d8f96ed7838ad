//! Console output formatter for judging results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use judging_application::{AssignmentPlan, BulkAssignOutput, LabelQueriesOutput};
use judging_domain::{
    ConfigIssue, Experiment, QueryStatus, Severity, distinct_selection, util::ellipsize,
};

const QUERY_TEXT_WIDTH: usize = 48;
const JUDGES_WIDTH: usize = 32;
const BAR_WIDTH: usize = 30;

/// Formats judging results as tables for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the queries table
    pub fn format_queries(output: &LabelQueriesOutput) -> String {
        let mut out = String::new();

        out.push_str(&Self::header(&output.experiment_name, &output.experiment_id));

        if output.rows.is_empty() {
            out.push_str(&format!("\n{}\n", "No queries match.".dimmed()));
            return out;
        }

        out.push_str(&format!(
            "\n{}\n",
            format!(
                "{:<10} {:<13} {:>5}  {:<14} {:<w$}  {}",
                "ID",
                "STATUS",
                "DONE",
                "TASK TYPE",
                "QUERY",
                "JUDGES",
                w = QUERY_TEXT_WIDTH
            )
            .bold()
        ));

        for row in &output.rows {
            out.push_str(&format!(
                "{:<10} {} {:>5}  {:<14} {:<w$}  {}\n",
                row.id.as_str(),
                Self::status_cell(row.status),
                format!("{}/{}", row.completed_assignments, row.total_assignments),
                ellipsize(row.task_type.as_deref().unwrap_or("-"), 14),
                ellipsize(&row.text, QUERY_TEXT_WIDTH),
                ellipsize(&row.judges.join(", "), JUDGES_WIDTH).dimmed(),
                w = QUERY_TEXT_WIDTH
            ));
        }

        out.push_str(&format!(
            "\n{} of {} queries shown\n",
            output.rows.len(),
            output.summary.total()
        ));

        out
    }

    /// Format the per-status counts with a completion bar
    pub fn format_summary(output: &LabelQueriesOutput) -> String {
        let summary = &output.summary;
        let mut out = String::new();

        out.push_str(&Self::header(&output.experiment_name, &output.experiment_id));
        out.push('\n');

        for status in QueryStatus::ALL {
            out.push_str(&format!(
                "  {} {:>4}\n",
                Self::status_cell(status),
                summary.count(status)
            ));
        }
        out.push_str(&format!("  {:<13} {:>4}\n", "Total".bold(), summary.total()));

        out.push_str(&format!(
            "\n  {} {:.0}% complete\n",
            summary.progress_bar(BAR_WIDTH).green(),
            summary.completion_ratio() * 100.0
        ));

        out
    }

    /// Format the assignment picker: who can still take the selection
    pub fn format_plan(plan: &AssignmentPlan) -> String {
        let selection_size = distinct_selection(&plan.selected_queries).len();
        let mut out = String::new();

        out.push_str(&Self::section_header(&format!(
            "Selected queries ({})",
            selection_size
        )));
        let ids: Vec<&str> = plan.selected_queries.iter().map(|q| q.as_str()).collect();
        out.push_str(&format!("  {}\n", ids.join(", ")));

        if !plan.unknown_queries.is_empty() {
            let unknown: Vec<&str> = plan.unknown_queries.iter().map(|q| q.as_str()).collect();
            out.push_str(&format!(
                "  {} {}\n",
                "Not in experiment:".yellow().bold(),
                unknown.join(", ")
            ));
        }

        out.push_str(&Self::section_header("Assignable judges"));
        if !plan.partition.has_assignable() {
            out.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        for candidate in &plan.partition.assignable {
            let holds = format!("holds {}/{}", candidate.conflict_count, selection_size);
            let note = if candidate.is_partially_conflicted {
                format!("{}  duplicates will be skipped", holds.yellow())
            } else {
                holds.dimmed().to_string()
            };
            out.push_str(&format!(
                "  {:<24} {:<8} {}\n",
                Self::judge_label(&candidate.judge.name, candidate.judge.id.as_str()),
                candidate.judge.role.display_name(),
                note
            ));
        }

        if !plan.partition.fully_conflicted.is_empty() {
            out.push_str(&Self::section_header("Already assigned to every selected query"));
            for judge in &plan.partition.fully_conflicted {
                out.push_str(&format!(
                    "  {}\n",
                    Self::judge_label(&judge.name, judge.id.as_str()).dimmed()
                ));
            }
        }

        out
    }

    /// Format the result of a bulk assignment
    pub fn format_assign(result: &BulkAssignOutput, experiment: &Experiment) -> String {
        let impact = &result.impact;
        let mut out = String::new();

        let title = if result.dry_run {
            "Bulk assignment (dry run)"
        } else {
            "Bulk assignment"
        };
        out.push_str(&Self::section_header(title));

        for judge in &impact.per_judge {
            let name = experiment
                .member(&judge.judge_id)
                .map(|j| j.name.as_str())
                .unwrap_or("?");
            let skipped = if judge.skipped_duplicates > 0 {
                format!("{} skipped", judge.skipped_duplicates).yellow()
            } else {
                "".normal()
            };
            out.push_str(&format!(
                "  {:<24} {:>3} new  {}\n",
                Self::judge_label(name, judge.judge_id.as_str()),
                judge.new_assignments,
                skipped
            ));
        }

        let verb = if result.dry_run { "would be created" } else { "created" };
        out.push_str(&format!(
            "\n{} {} new assignments {}, {} duplicates skipped\n",
            if impact.is_no_op() {
                "!".yellow().bold()
            } else {
                "✓".green().bold()
            },
            impact.total_new_assignments,
            verb,
            impact.total_skipped_duplicates()
        ));

        out
    }

    /// Format snapshot validation issues
    pub fn format_issues(issues: &[ConfigIssue]) -> String {
        if issues.is_empty() {
            return format!("{}\n", "✓ No issues found".green());
        }

        let mut out = String::new();
        for issue in issues {
            let label = match issue.severity {
                Severity::Error => "error:".red().bold(),
                Severity::Warning => "warning:".yellow().bold(),
            };
            out.push_str(&format!("{} {}\n", label, issue.message));
        }

        let errors = issues.iter().filter(|i| i.is_error()).count();
        out.push_str(&format!(
            "\n{} errors, {} warnings\n",
            errors,
            issues.len() - errors
        ));
        out
    }

    fn status_cell(status: QueryStatus) -> ColoredString {
        let padded = format!("{:<13}", status.display_name());
        match status {
            QueryStatus::NotAssigned => padded.dimmed(),
            QueryStatus::InProgress => padded.yellow(),
            QueryStatus::Completed => padded.green(),
        }
    }

    /// Names are not unique, so the ID is always shown alongside
    fn judge_label(name: &str, id: &str) -> String {
        format!("{} ({})", name, id)
    }

    fn header(name: &str, id: &str) -> String {
        format!("{} {}\n", name.cyan().bold(), format!("[{}]", id).dimmed())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_queries(&self, output: &LabelQueriesOutput) -> String {
        Self::format_queries(output)
    }

    fn format_summary(&self, output: &LabelQueriesOutput) -> String {
        Self::format_summary(output)
    }

    fn format_plan(&self, plan: &AssignmentPlan) -> String {
        Self::format_plan(plan)
    }

    fn format_assign(&self, result: &BulkAssignOutput, experiment: &Experiment) -> String {
        Self::format_assign(result, experiment)
    }

    fn format_issues(&self, issues: &[ConfigIssue]) -> String {
        Self::format_issues(issues)
    }
}
