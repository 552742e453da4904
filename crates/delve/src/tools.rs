//! Tools the model may request while researching.
//!
//! The registry is built once per agent and never changes afterwards. It only
//! routes a call to the named tool; failure policy belongs to the agent.
pub mod report;
pub mod search;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::{ToolError, ToolResult};
use crate::models::tool::ToolDescriptor;
use crate::report::Report;

pub use report::{ReportTool, REPORT_TOOL_NAME};
pub use search::{SearchTool, SEARCH_FALLBACK, SEARCH_TOOL_NAME};

/// What a tool hands back to the agent
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    /// Text fed back to the model as the tool response
    pub text: String,
    /// Set when the tool produced the final report
    pub report: Option<Report>,
}

impl ToolOutput {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            report: None,
        }
    }

    /// The canonical JSON form of the report is what the model sees
    pub fn report(report: Report) -> ToolResult<Self> {
        let text = serde_json::to_string(&report)
            .map_err(|e| ToolError::ExecutionFailure(e.to_string()))?;
        Ok(Self {
            text,
            report: Some(report),
        })
    }
}

/// A named operation that can be requested by the model
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name, description and parameter schema advertised to the model
    fn descriptor(&self) -> &ToolDescriptor;

    /// Run the tool with already parsed arguments
    async fn call(&self, arguments: Value) -> ToolResult<ToolOutput>;
}

/// Fixed set of tools, looked up by name
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<Box<dyn Tool>>) -> Self {
        Self { tools }
    }

    /// Descriptors of every registered tool, in registration order
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|t| t.descriptor().clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|t| t.descriptor().name == name)
            .map(|t| &**t)
    }

    /// Dispatch a call to the named tool
    pub async fn invoke(&self, name: &str, arguments: Value) -> ToolResult<ToolOutput> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.call(arguments).await
    }
}
