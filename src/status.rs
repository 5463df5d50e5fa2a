//! # Status Extractor
//!
//! Pulls per-line status fields out of the raw TfL document. The document is
//! never deserialized into a full typed model; each line is located by id in
//! the top-level array and only the first `lineStatuses` entry is read.
//! Missing lines or fields resolve to the zero value instead of erroring, so
//! a line the API stopped reporting simply renders empty.

use serde::Deserialize;
use serde_json::Value;

use crate::config::GOOD_SERVICE_SEVERITY;

/// Status fields for one line from one fetch: severity code, human-readable
/// description, and a free-text reason (empty for nominal service).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineStatus {
    #[serde(rename = "statusSeverity")]
    pub severity: i64,
    #[serde(rename = "statusSeverityDescription")]
    pub description: String,
    pub reason: String,
}

impl LineStatus {
    /// Extract the status for `line_id` from the fetched document.
    ///
    /// Walks `[{id, lineStatuses: [..]}]` looking for the first element whose
    /// `id` matches, then reads `lineStatuses[0]`. Any missing step yields
    /// the default (zero severity, empty strings).
    pub fn for_line(doc: &Value, line_id: &str) -> Self {
        let entry = doc
            .as_array()
            .and_then(|lines| {
                lines
                    .iter()
                    .find(|line| line.get("id").and_then(Value::as_str) == Some(line_id))
            })
            .and_then(|line| line.get("lineStatuses"))
            .and_then(|statuses| statuses.get(0));

        match entry {
            Some(status) => serde_json::from_value(status.clone()).unwrap_or_default(),
            None => {
                tracing::debug!(line_id, "no status entry in document");
                Self::default()
            }
        }
    }

    /// True when the severity code signals nominal service.
    pub fn is_good_service(&self) -> bool {
        self.severity == GOOD_SERVICE_SEVERITY
    }
}
