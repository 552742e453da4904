use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

use super::{Tool, ToolOutput};
use crate::errors::{ToolError, ToolResult};
use crate::models::tool::ToolDescriptor;
use crate::search::base::{SearchProvider, SearchResult};

pub const SEARCH_TOOL_NAME: &str = "search_web";

/// Tool response used when the search backend fails, so the run can go on without it
pub const SEARCH_FALLBACK: &str = "Search failed, continue with the available information.";

const MAX_SNIPPET_CHARS: usize = 1000;

/// The trimmed, non-empty `query` argument of a search call
pub fn query_argument(arguments: &Value) -> Option<&str> {
    arguments
        .get("query")
        .and_then(|q| q.as_str())
        .map(str::trim)
        .filter(|q| !q.is_empty())
}

pub struct SearchTool {
    descriptor: ToolDescriptor,
    provider: Arc<dyn SearchProvider>,
    max_results: usize,
}

impl SearchTool {
    pub fn new(provider: Arc<dyn SearchProvider>, max_results: usize) -> Self {
        Self {
            descriptor: ToolDescriptor::new(
                SEARCH_TOOL_NAME,
                "Search the web for recent information",
                json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "The search query"
                        }
                    },
                    "required": ["query"]
                }),
            ),
            provider,
            max_results,
        }
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    async fn call(&self, arguments: Value) -> ToolResult<ToolOutput> {
        let query = query_argument(&arguments).ok_or_else(|| {
            ToolError::MalformedArguments("query must be a non-empty string".to_string())
        })?;

        match self.provider.search(query, self.max_results).await {
            Ok(results) => Ok(ToolOutput::text(render_results(&results))),
            Err(e) => {
                tracing::warn!("Search for {:?} failed: {}", query, e);
                Ok(ToolOutput::text(SEARCH_FALLBACK))
            }
        }
    }
}

/// Render results as blank-line separated title / URL / content blocks
pub fn render_results(results: &[SearchResult]) -> String {
    let mut output = String::new();
    for result in results {
        output.push_str(&format!("Title: {}\n", result.title));
        output.push_str(&format!("URL: {}\n", result.url));
        output.push_str(&format!(
            "Content: {}\n\n",
            truncate_snippet(result.content.trim(), MAX_SNIPPET_CHARS)
        ));
    }
    output
}

fn truncate_snippet(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
