use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Describes a tool the model is allowed to request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDescriptor {
    /// The name of the tool
    pub name: String,
    /// A description of what the tool does
    pub description: String,
    /// JSON schema of the arguments the tool accepts
    pub parameters: Value,
}

impl ToolDescriptor {
    /// Create a new descriptor with the given name, description and parameter schema
    pub fn new<N, D>(name: N, description: D, parameters: Value) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        ToolDescriptor {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Names of the parameters listed as required in the schema
    pub fn required(&self) -> Vec<&str> {
        self.parameters
            .get("required")
            .and_then(|r| r.as_array())
            .map(|r| r.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default()
    }
}

/// A tool call requested by the model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCall {
    /// The name of the tool to execute
    pub name: String,
    /// The arguments exactly as the model produced them, not yet parsed
    pub arguments: String,
}

impl ToolCall {
    /// Create a new ToolCall with the given name and raw arguments
    pub fn new<N: Into<String>, A: Into<String>>(name: N, arguments: A) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}
