use serde::{Deserialize, Serialize};

/// The structured answer to a research question.
///
/// All four fields are required when a report is read from tool arguments;
/// the lists may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub sources: Vec<String>,
}

impl Report {
    pub fn new<T: Into<String>, S: Into<String>>(
        title: T,
        summary: S,
        key_points: Vec<String>,
        sources: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            key_points,
            sources,
        }
    }

    /// Wrap free text from the model as a minimal report
    pub fn from_answer<S: Into<String>>(answer: S) -> Self {
        Self::new("Research Results", answer, Vec::new(), Vec::new())
    }
}
