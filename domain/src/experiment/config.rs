//! Experiment sourcing and judging configuration

use serde::{Deserialize, Serialize};

/// Where an experiment's queries come from
///
/// Snapshots may carry the human labels
/// (`"Upload query set"`, `"Ad hoc query"`); both those and the canonical
/// kebab-case forms are accepted. Anything else is kept verbatim as
/// [`QuerySetSelection::Other`] so status derivation can fall through to the
/// generic rule instead of failing.
///
/// # Example
///
/// ```
/// use judging_domain::experiment::QuerySetSelection;
///
/// assert_eq!("Upload query set".parse(), Ok(QuerySetSelection::Uploaded));
/// assert_eq!("ad-hoc".parse(), Ok(QuerySetSelection::AdHoc));
/// assert!(matches!(
///     "sampled".parse::<QuerySetSelection>(),
///     Ok(QuerySetSelection::Other(_))
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum QuerySetSelection {
    /// A fixed query set uploaded before judging starts
    #[default]
    Uploaded,
    /// Queries created by judges as they submit responses
    AdHoc,
    /// Unrecognized selection, preserved as written
    Other(String),
}

impl QuerySetSelection {
    pub fn as_str(&self) -> &str {
        match self {
            QuerySetSelection::Uploaded => "uploaded",
            QuerySetSelection::AdHoc => "ad-hoc",
            QuerySetSelection::Other(s) => s,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            QuerySetSelection::Uploaded => "Upload query set",
            QuerySetSelection::AdHoc => "Ad hoc query",
            QuerySetSelection::Other(s) => s,
        }
    }

    /// Check if the selection is one the status rules know about
    pub fn is_recognized(&self) -> bool {
        !matches!(self, QuerySetSelection::Other(_))
    }
}

impl std::fmt::Display for QuerySetSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for QuerySetSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        Ok(match normalized.as_str() {
            "uploaded" | "upload" | "upload-query-set" => QuerySetSelection::Uploaded,
            "ad-hoc" | "adhoc" | "ad-hoc-query" => QuerySetSelection::AdHoc,
            _ => QuerySetSelection::Other(s.to_string()),
        })
    }
}

impl From<String> for QuerySetSelection {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(selection) => selection,
            Err(never) => match never {},
        }
    }
}

impl From<QuerySetSelection> for String {
    fn from(selection: QuerySetSelection) -> Self {
        selection.as_str().to_string()
    }
}

/// Experiment-level configuration read by the status rules
///
/// Set once when an experiment is loaded and never modified by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperimentConfig {
    /// Query source for this experiment
    pub query_set_selection: QuerySetSelection,
    /// Whether any member may judge any query without an explicit assignment
    pub allow_anyone_to_judge: bool,
    /// Whether ad-hoc queries are judged live as they are created
    pub is_real_time_ad_hoc: bool,
}

impl ExperimentConfig {
    /// Config for an uploaded query set
    pub fn uploaded(allow_anyone_to_judge: bool) -> Self {
        Self {
            query_set_selection: QuerySetSelection::Uploaded,
            allow_anyone_to_judge,
            is_real_time_ad_hoc: false,
        }
    }

    /// Config for an ad-hoc query set
    pub fn ad_hoc(is_real_time: bool) -> Self {
        Self {
            query_set_selection: QuerySetSelection::AdHoc,
            allow_anyone_to_judge: true,
            is_real_time_ad_hoc: is_real_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_front_end_labels() {
        assert_eq!(
            "Upload query set".parse::<QuerySetSelection>().ok(),
            Some(QuerySetSelection::Uploaded)
        );
        assert_eq!(
            "Ad hoc query".parse::<QuerySetSelection>().ok(),
            Some(QuerySetSelection::AdHoc)
        );
        assert_eq!(
            "ad_hoc".parse::<QuerySetSelection>().ok(),
            Some(QuerySetSelection::AdHoc)
        );
    }

    #[test]
    fn test_unknown_selection_is_preserved() {
        let selection: QuerySetSelection = "Sampled from logs".parse().unwrap();
        assert_eq!(
            selection,
            QuerySetSelection::Other("Sampled from logs".to_string())
        );
        assert!(!selection.is_recognized());
        assert_eq!(selection.as_str(), "Sampled from logs");
    }

    #[test]
    fn test_config_deserialize_camel_case() {
        let json = r#"{
            "querySetSelection": "Upload query set",
            "allowAnyoneToJudge": true,
            "isRealTimeAdHoc": false
        }"#;
        let config: ExperimentConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.query_set_selection, QuerySetSelection::Uploaded);
        assert!(config.allow_anyone_to_judge);
        assert!(!config.is_real_time_ad_hoc);
    }

    #[test]
    fn test_config_serializes_canonical_selection() {
        let json = serde_json::to_value(ExperimentConfig::ad_hoc(true)).unwrap();
        assert_eq!(json["querySetSelection"], "ad-hoc");
        assert_eq!(json["isRealTimeAdHoc"], true);
    }

    #[test]
    fn test_config_defaults_when_fields_missing() {
        let config: ExperimentConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ExperimentConfig::default());
        assert_eq!(config.query_set_selection, QuerySetSelection::Uploaded);
    }
}
