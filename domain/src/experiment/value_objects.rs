//! Experiment identifiers.
//!
//! - [`QueryId`] - identifier of a query within an experiment
//! - [`JudgeId`] - stable identifier of a judge on the experiment roster
//!
//! Judges are keyed by [`JudgeId`] everywhere conflicts are computed. Display
//! names are not unique and are only carried for rendering.

use serde::{Deserialize, Serialize};

/// Identifier of a query within an experiment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QueryId(String);

impl QueryId {
    /// Creates a QueryId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for QueryId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for QueryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier of a judge.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JudgeId(String);

impl JudgeId {
    /// Creates a JudgeId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for JudgeId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for JudgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&QueryId::new("q-1")).unwrap();
        assert_eq!(json, "\"q-1\"");

        let judge: JudgeId = serde_json::from_str("\"j-7\"").unwrap();
        assert_eq!(judge.as_str(), "j-7");
    }

    #[test]
    fn test_ids_order_lexically() {
        let mut ids = vec![JudgeId::from("b"), JudgeId::from("a"), JudgeId::from("c")];
        ids.sort();
        assert_eq!(
            ids.iter().map(JudgeId::as_str).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }
}
