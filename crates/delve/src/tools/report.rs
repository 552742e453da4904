use async_trait::async_trait;
use serde_json::{json, Value};

use super::{Tool, ToolOutput};
use crate::errors::{ToolError, ToolResult};
use crate::models::tool::ToolDescriptor;
use crate::report::Report;

pub const REPORT_TOOL_NAME: &str = "generate_report";

/// Packages the final answer. Calling it successfully ends the research run.
pub struct ReportTool {
    descriptor: ToolDescriptor,
}

impl ReportTool {
    pub fn new() -> Self {
        Self {
            descriptor: ToolDescriptor::new(
                REPORT_TOOL_NAME,
                "Generate a structured report with a title, a summary, key points and sources. \
                 Always call this tool last to format the final answer.",
                json!({
                    "type": "object",
                    "properties": {
                        "title": {
                            "type": "string",
                            "description": "The title of the report"
                        },
                        "summary": {
                            "type": "string",
                            "description": "A summary of 2-3 sentences"
                        },
                        "key_points": {
                            "type": "array",
                            "items": {"type": "string"},
                            "description": "A list of 3 to 5 key points"
                        },
                        "sources": {
                            "type": "array",
                            "items": {"type": "string"},
                            "description": "URLs of the sources used"
                        }
                    },
                    "required": ["title", "summary", "key_points", "sources"]
                }),
            ),
        }
    }
}

impl Default for ReportTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for ReportTool {
    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    async fn call(&self, arguments: Value) -> ToolResult<ToolOutput> {
        let report: Report = serde_json::from_value(arguments)
            .map_err(|e| ToolError::MalformedArguments(e.to_string()))?;
        ToolOutput::report(report)
    }
}
