use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single tool call. These never abort the agent loop, they are
/// rendered back to the model as the tool response instead.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum ToolError {
    #[error("Tool not available: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    MalformedArguments(String),

    #[error("Tool execution failed: {0}")]
    ExecutionFailure(String),
}

pub type ToolResult<T> = Result<T, ToolError>;

/// Failure of a whole research request.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgentError {
    #[error("LLM call failed: {0}")]
    Provider(String),

    #[error("max iterations exceeded")]
    IterationsExceeded,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
