//! JSON output formatter
//!
//! Emits the use case outputs as pretty-printed JSON for scripting.

use crate::output::formatter::OutputFormatter;
use judging_application::{AssignmentPlan, BulkAssignOutput, LabelQueriesOutput};
use judging_domain::{ConfigIssue, Experiment};
use serde::Serialize;
use serde_json::json;

/// Formats judging results as JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_queries(&self, output: &LabelQueriesOutput) -> String {
        Self::pretty(output)
    }

    fn format_summary(&self, output: &LabelQueriesOutput) -> String {
        Self::pretty(&json!({
            "experimentId": output.experiment_id,
            "experimentName": output.experiment_name,
            "summary": output.summary,
            "total": output.summary.total(),
            "completionRatio": output.summary.completion_ratio(),
        }))
    }

    fn format_plan(&self, plan: &AssignmentPlan) -> String {
        Self::pretty(plan)
    }

    fn format_assign(&self, result: &BulkAssignOutput, _experiment: &Experiment) -> String {
        Self::pretty(result)
    }

    fn format_issues(&self, issues: &[ConfigIssue]) -> String {
        let entries: Vec<_> = issues
            .iter()
            .map(|issue| {
                json!({
                    "severity": issue.severity.as_str(),
                    "message": issue.message,
                })
            })
            .collect();
        Self::pretty(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use judging_application::{LabelQueriesUseCase, PlanAssignmentUseCase};
    use judging_domain::{
        Assignment, ConfigIssueCode, ExperimentConfig, Judge, JudgeRole, Query, QueryFilter,
        QueryId,
    };

    fn parse(text: &str) -> serde_json::Value {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn test_summary_json() {
        let experiment = Experiment::new("exp-1", "Ranking", ExperimentConfig::uploaded(false))
            .with_query(Query::new("q-1", "a"))
            .with_query(Query::new("q-2", "b"));
        let output = LabelQueriesUseCase::new().execute(&experiment, &QueryFilter::default());

        let value = parse(&JsonFormatter.format_summary(&output));
        assert_eq!(value["experimentId"], "exp-1");
        assert_eq!(value["total"], 2);
        assert_eq!(value["summary"]["notAssigned"], 2);
        assert_eq!(value["summary"]["completed"], 0);
    }

    #[test]
    fn test_ad_hoc_summary_counts_every_query_completed() {
        let experiment = Experiment::new("exp-2", "Chat", ExperimentConfig::ad_hoc(false))
            .with_query(Query::new("q-1", "a"))
            .with_query(Query::new("q-2", "b"));
        let output = LabelQueriesUseCase::new().execute(&experiment, &QueryFilter::default());

        let value = parse(&JsonFormatter.format_summary(&output));
        assert_eq!(value["summary"]["completed"], 2);
        assert_eq!(value["summary"]["notAssigned"], 0);
        assert_eq!(value["completionRatio"], 1.0);
    }

    #[test]
    fn test_plan_json_uses_camel_case_keys() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let experiment = Experiment::new("exp-1", "Ranking", ExperimentConfig::uploaded(false))
            .with_member(Judge::new("u-1", "Alex Kim", JudgeRole::Owner))
            .with_member(Judge::new("u-2", "Jordan Blake", JudgeRole::Judge))
            .with_query(
                Query::new("q-1", "a")
                    .with_assignment(Assignment::new("u-2", "Jordan Blake", at)),
            )
            .with_query(Query::new("q-2", "b"));
        let selected = vec![QueryId::new("q-1"), QueryId::new("q-2")];
        let plan = PlanAssignmentUseCase::new()
            .execute(&experiment, &selected)
            .unwrap();

        let value = parse(&JsonFormatter.format_plan(&plan));
        assert!(value.get("selectedQueries").is_some());
        assert!(value.get("unknownQueries").is_some());
        assert_eq!(value["statusMap"]["u-2"]["conflictCount"], 1);
        assert_eq!(value["statusMap"]["u-2"]["assignedQueries"][0], "q-1");
        let candidate = &value["partition"]["assignable"][1];
        assert_eq!(candidate["conflictCount"], 1);
        assert_eq!(candidate["isPartiallyConflicted"], true);
        assert!(value["partition"]["fullyConflicted"].is_array());
    }

    #[test]
    fn test_issues_json() {
        let issues = vec![ConfigIssue::warning(ConfigIssueCode::MissingOwner, "no owner")];
        let value = parse(&JsonFormatter.format_issues(&issues));
        assert_eq!(value[0]["severity"], "warning");
        assert_eq!(value[0]["message"], "no owner");
    }
}
