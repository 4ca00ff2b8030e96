//! Bug report data model.

use serde::{Deserialize, Serialize};

/// A single bug report as filed in the issue tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugReport {
    /// Tracker key, e.g. `PROJ-1234`.
    pub id: String,
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl BugReport {
    /// Text the similarity engine scores when comparing two reports.
    pub fn corpus_text(&self) -> String {
        if self.description.is_empty() {
            self.summary.clone()
        } else {
            format!("{} {}", self.summary, self.description)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tracker_document() {
        let report: BugReport = serde_json::from_str(
            r#"{"id":"PROJ-42","summary":"Crash on save","description":"NPE in editor","labels":["crash"]}"#,
        )
        .expect("parse");

        assert_eq!(report.id, "PROJ-42");
        assert_eq!(report.corpus_text(), "Crash on save NPE in editor");
    }

    #[test]
    fn description_and_labels_are_optional() {
        let report: BugReport =
            serde_json::from_str(r#"{"id":"PROJ-1","summary":"Login fails"}"#).expect("parse");

        assert!(report.labels.is_empty());
        assert_eq!(report.corpus_text(), "Login fails");
    }
}
