use anyhow::{anyhow, Result};
use serde_json::{json, Value};

use crate::models::message::{Message, MessageContent};
use crate::models::tool::{ToolCall, ToolDescriptor};

/// Convert the internal transcript to OpenAI's API message specification
///
/// Tool responses become their own `tool` role entries keyed by the call id, and a
/// failed tool result is shown as text so the model can interpret the error.
pub fn messages_to_openai_spec(messages: &[Message]) -> Vec<Value> {
    let mut messages_spec = Vec::new();

    for message in messages {
        let mut converted = json!({
            "role": message.role
        });
        let mut tool_calls = Vec::new();
        let mut output = Vec::new();

        for content in &message.content {
            match content {
                MessageContent::Text(text) => {
                    converted["content"] = json!(text);
                }
                MessageContent::ToolRequest(request) => {
                    tool_calls.push(json!({
                        "id": request.id,
                        "type": "function",
                        "function": {
                            "name": request.tool_call.name,
                            "arguments": request.tool_call.arguments,
                        }
                    }));
                }
                MessageContent::ToolResponse(response) => {
                    let content = match &response.tool_result {
                        Ok(text) => text.clone(),
                        Err(e) => format!("The tool call returned the following error:\n{}", e),
                    };
                    output.push(json!({
                        "role": "tool",
                        "content": content,
                        "tool_call_id": response.id
                    }));
                }
            }
        }

        if !tool_calls.is_empty() {
            converted["tool_calls"] = json!(tool_calls);
        }

        if converted.get("content").is_some() || converted.get("tool_calls").is_some() {
            output.insert(0, converted);
        }
        messages_spec.extend(output);
    }

    messages_spec
}

/// Convert tool descriptors to OpenAI's API tool specification
pub fn tools_to_openai_spec(tools: &[ToolDescriptor]) -> Result<Vec<Value>> {
    let mut tool_names = std::collections::HashSet::new();
    let mut result = Vec::new();

    for tool in tools {
        if !tool_names.insert(&tool.name) {
            return Err(anyhow!("Duplicate tool name: {}", tool.name));
        }

        result.push(json!({
            "type": "function",
            "function": {
                "name": tool.name,
                "description": tool.description,
                "parameters": tool.parameters,
            }
        }));
    }

    Ok(result)
}

/// Convert OpenAI's API response to internal Message format
///
/// Tool call arguments are kept as the raw text the model produced. Parsing them
/// is left to the agent so a malformed payload can be answered like any other
/// tool failure.
pub fn openai_response_to_message(response: &Value) -> Result<Message> {
    let original = response
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .ok_or_else(|| anyhow!("No message in response: {}", response))?;

    let mut message = Message::assistant();

    if let Some(text) = original.get("content").and_then(|t| t.as_str()) {
        message = message.with_text(text);
    }

    if let Some(tool_calls) = original.get("tool_calls").and_then(|t| t.as_array()) {
        for tool_call in tool_calls {
            let id = tool_call["id"].as_str().unwrap_or_default().to_string();
            let function_name = tool_call["function"]["name"]
                .as_str()
                .unwrap_or_default()
                .to_string();
            let arguments = tool_call["function"]["arguments"]
                .as_str()
                .unwrap_or_default()
                .to_string();

            message = message.with_tool_request(id, ToolCall::new(function_name, arguments));
        }
    }

    Ok(message)
}

#[derive(Debug, thiserror::Error)]
#[error("Context length exceeded. Message: {0}")]
pub struct ContextLengthExceededError(String);

pub fn check_openai_context_length_error(error: &Value) -> Option<ContextLengthExceededError> {
    let code = error.get("code")?.as_str()?;
    if code == "context_length_exceeded" || code == "string_above_max_length" {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error")
            .to_string();
        Some(ContextLengthExceededError(message))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ToolError;
    use crate::models::role::Role;

    const OPENAI_TOOL_USE_RESPONSE: &str = r#"{
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "1",
                    "type": "function",
                    "function": {
                        "name": "search_web",
                        "arguments": "{\"query\": \"rust async\"}"
                    }
                }]
            }
        }],
        "usage": {
            "prompt_tokens": 10,
            "completion_tokens": 25,
            "total_tokens": 35
        }
    }"#;

    #[test]
    fn test_messages_to_openai_spec() -> Result<()> {
        let messages = vec![
            Message::system().with_text("Be precise"),
            Message::user().with_text("Hello"),
        ];
        let spec = messages_to_openai_spec(&messages);

        assert_eq!(spec.len(), 2);
        assert_eq!(spec[0]["role"], "system");
        assert_eq!(spec[0]["content"], "Be precise");
        assert_eq!(spec[1]["role"], "user");
        assert_eq!(spec[1]["content"], "Hello");
        Ok(())
    }

    #[test]
    fn test_messages_with_tool_exchange() -> Result<()> {
        let messages = vec![
            Message::assistant()
                .with_tool_request("call_1", ToolCall::new("search_web", r#"{"query":"x"}"#)),
            Message::tool().with_tool_response("call_1", Ok("Title: x".to_string())),
            Message::assistant().with_tool_request("call_2", ToolCall::new("fetch", "{}")),
            Message::tool().with_tool_response(
                "call_2",
                Err(ToolError::UnknownTool("fetch".to_string())),
            ),
        ];
        let spec = messages_to_openai_spec(&messages);

        assert_eq!(spec.len(), 4);
        assert_eq!(spec[0]["role"], "assistant");
        assert!(spec[0].get("content").is_none());
        assert_eq!(spec[0]["tool_calls"][0]["id"], "call_1");
        assert_eq!(spec[0]["tool_calls"][0]["function"]["arguments"], r#"{"query":"x"}"#);

        assert_eq!(spec[1]["role"], "tool");
        assert_eq!(spec[1]["tool_call_id"], "call_1");
        assert_eq!(spec[1]["content"], "Title: x");

        assert_eq!(spec[3]["tool_call_id"], "call_2");
        assert_eq!(
            spec[3]["content"],
            "The tool call returned the following error:\nTool not available: fetch"
        );
        Ok(())
    }

    #[test]
    fn test_tools_to_openai_spec() -> Result<()> {
        let tool = ToolDescriptor::new(
            "test_tool",
            "A test tool",
            json!({
                "type": "object",
                "properties": {
                    "input": {
                        "type": "string",
                        "description": "Test parameter"
                    }
                },
                "required": ["input"]
            }),
        );

        let spec = tools_to_openai_spec(&[tool])?;

        assert_eq!(spec.len(), 1);
        assert_eq!(spec[0]["type"], "function");
        assert_eq!(spec[0]["function"]["name"], "test_tool");
        Ok(())
    }

    #[test]
    fn test_tools_to_openai_spec_duplicate() {
        let tool = ToolDescriptor::new("dup", "Duplicate", json!({"type": "object"}));
        let result = tools_to_openai_spec(&[tool.clone(), tool]);
        assert!(result.is_err());
    }

    #[test]
    fn test_openai_response_to_message_tool_use() -> Result<()> {
        let response: Value = serde_json::from_str(OPENAI_TOOL_USE_RESPONSE)?;
        let message = openai_response_to_message(&response)?;

        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.text(), None);
        let requests = message.tool_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].id, "1");
        assert_eq!(requests[0].tool_call.name, "search_web");
        assert_eq!(requests[0].tool_call.arguments, r#"{"query": "rust async"}"#);
        Ok(())
    }

    #[test]
    fn test_openai_response_keeps_invalid_arguments_raw() -> Result<()> {
        let response = json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "tool_calls": [{
                        "id": "1",
                        "function": {"name": "search_web", "arguments": "{not json"}
                    }]
                }
            }]
        });
        let message = openai_response_to_message(&response)?;
        assert_eq!(message.tool_requests()[0].tool_call.arguments, "{not json");
        Ok(())
    }

    #[test]
    fn test_openai_response_without_choices() {
        let result = openai_response_to_message(&json!({"choices": []}));
        assert!(result.is_err());
    }

    #[test]
    fn test_check_openai_context_length_error() {
        let error = json!({
            "code": "context_length_exceeded",
            "message": "This message is too long"
        });

        let result = check_openai_context_length_error(&error);
        assert!(result.is_some());
        assert_eq!(
            result.unwrap().to_string(),
            "Context length exceeded. Message: This message is too long"
        );

        let error = json!({
            "code": "other_error",
            "message": "Some other error"
        });

        let result = check_openai_context_length_error(&error);
        assert!(result.is_none());
    }
}
