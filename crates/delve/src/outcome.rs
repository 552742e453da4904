use serde::{Deserialize, Serialize};

use crate::report::Report;

const ERROR_TITLE: &str = "Error";
const ERROR_SUMMARY: &str =
    "An error occurred during the research. Please try again in a few moments.";

/// Terminal state of one agent run
#[derive(Debug, Clone, PartialEq)]
pub enum LoopOutcome {
    Completed {
        report: Report,
        searches: Vec<String>,
    },
    Failed {
        reason: String,
    },
}

impl LoopOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, LoopOutcome::Completed { .. })
    }
}

/// The shape returned to callers of the research endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub searches: Vec<String>,
    pub report: Report,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResearchResponse {
    /// The degraded response used whenever a run does not produce a report
    pub fn failed<S: Into<String>>(reason: S) -> Self {
        Self {
            searches: Vec::new(),
            report: Report::new(ERROR_TITLE, ERROR_SUMMARY, Vec::new(), Vec::new()),
            error: Some(reason.into()),
        }
    }
}

impl From<LoopOutcome> for ResearchResponse {
    fn from(outcome: LoopOutcome) -> Self {
        match outcome {
            LoopOutcome::Completed { report, searches } => Self {
                searches,
                report,
                error: None,
            },
            LoopOutcome::Failed { reason } => Self::failed(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_completed_response() {
        let report = Report::new("T", "S", vec!["k".to_string()], vec!["https://a".to_string()]);
        let response = ResearchResponse::from(LoopOutcome::Completed {
            report: report.clone(),
            searches: vec!["q1".to_string(), "q2".to_string()],
        });

        assert_eq!(response.report, report);
        assert_eq!(response.searches, vec!["q1", "q2"]);
        assert_eq!(response.error, None);

        // error is omitted entirely on success
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failed_response() {
        let response = ResearchResponse::from(LoopOutcome::Failed {
            reason: "max iterations exceeded".to_string(),
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "searches": [],
                "report": {
                    "title": "Error",
                    "summary": ERROR_SUMMARY,
                    "key_points": [],
                    "sources": []
                },
                "error": "max iterations exceeded"
            })
        );
    }
}
