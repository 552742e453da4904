use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

use crate::errors::{AgentError, AgentResult, ToolError, ToolResult};
use crate::models::message::{Message, ToolRequest};
use crate::models::tool::ToolCall;
use crate::models::transcript::Transcript;
use crate::outcome::LoopOutcome;
use crate::prompt_template::{load_prompt, load_prompt_file, DEFAULT_SYSTEM_PROMPT};
use crate::providers::base::Provider;
use crate::report::Report;
use crate::search::base::SearchProvider;
use crate::tools::search::query_argument;
use crate::tools::{
    ReportTool, SearchTool, ToolOutput, ToolRegistry, REPORT_TOOL_NAME, SEARCH_TOOL_NAME,
};

pub const DEFAULT_MAX_ITERATIONS: usize = 5;
pub const DEFAULT_SEARCH_RESULTS: usize = 3;
pub const DEFAULT_SEARCH_GUIDANCE: &str = "do 2-3 searches from different angles";

/// Knobs that distinguish one research agent from another
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    /// Model turns allowed before the run is abandoned
    pub max_iterations: usize,
    /// Results requested from the search backend per query
    pub search_results: usize,
    /// How much searching the system prompt asks for
    pub search_guidance: String,
    /// Replaces the built-in system prompt template when set
    pub system_prompt_template: Option<PathBuf>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            search_results: DEFAULT_SEARCH_RESULTS,
            search_guidance: DEFAULT_SEARCH_GUIDANCE.to_string(),
            system_prompt_template: None,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
struct ToolInfo {
    name: String,
    description: String,
}

#[derive(Clone, Debug, Serialize)]
struct PromptContext {
    search_tool: &'static str,
    report_tool: &'static str,
    search_guidance: String,
    tools: Vec<ToolInfo>,
}

/// Agent drives the model through searches until it produces a report.
///
/// One agent is shared by every request; each call to [`Agent::research`] owns
/// its own transcript and search history.
pub struct Agent {
    provider: Arc<dyn Provider>,
    tools: ToolRegistry,
    system_prompt: String,
    max_iterations: usize,
}

impl Agent {
    pub fn new(
        provider: Arc<dyn Provider>,
        search: Arc<dyn SearchProvider>,
        config: AgentConfig,
    ) -> AgentResult<Self> {
        let tools = ToolRegistry::new(vec![
            Box::new(SearchTool::new(search, config.search_results)),
            Box::new(ReportTool::new()),
        ]);
        let system_prompt = Self::render_system_prompt(&config, &tools)?;

        Ok(Self {
            provider,
            tools,
            system_prompt,
            max_iterations: config.max_iterations,
        })
    }

    fn render_system_prompt(config: &AgentConfig, tools: &ToolRegistry) -> AgentResult<String> {
        let context = PromptContext {
            search_tool: SEARCH_TOOL_NAME,
            report_tool: REPORT_TOOL_NAME,
            search_guidance: config.search_guidance.clone(),
            tools: tools
                .descriptors()
                .into_iter()
                .map(|d| ToolInfo {
                    name: d.name,
                    description: d.description,
                })
                .collect(),
        };

        let rendered = match &config.system_prompt_template {
            Some(path) => load_prompt_file(path, &context),
            None => load_prompt(DEFAULT_SYSTEM_PROMPT, &context),
        };
        rendered.map_err(|e| AgentError::Internal(e.to_string()))
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Answer a question. Always returns a terminal outcome, failures included.
    pub async fn research(&self, question: &str) -> LoopOutcome {
        match self.run(question).await {
            Ok((report, searches)) => LoopOutcome::Completed { report, searches },
            Err(e) => {
                tracing::error!("Research failed: {}", e);
                LoopOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn run(&self, question: &str) -> AgentResult<(Report, Vec<String>)> {
        let mut transcript = Transcript::new(&self.system_prompt, question);
        let mut searches = Vec::new();
        let tools = self.tools.descriptors();

        for iteration in 0..self.max_iterations {
            tracing::info!("Iteration {}/{}", iteration + 1, self.max_iterations);
            debug_assert!(transcript.unanswered_tool_requests().is_empty());

            let (response, usage) = self
                .provider
                .complete(transcript.messages(), &tools)
                .await
                .map_err(|e| AgentError::Provider(e.to_string()))?;
            tracing::debug!(
                input_tokens = ?usage.input_tokens,
                output_tokens = ?usage.output_tokens,
                "Completion received"
            );

            let requests: Vec<ToolRequest> =
                response.tool_requests().into_iter().cloned().collect();

            if requests.is_empty() {
                // A plain text answer still comes back as a report
                let answer = response.text().unwrap_or_default();
                tracing::info!("Model answered without a report, wrapping the text");
                return Ok((Report::from_answer(answer), searches));
            }

            transcript.push(response);

            if let Some(report) = self
                .dispatch_turn(&requests, &mut transcript, &mut searches)
                .await
            {
                return Ok((report, searches));
            }
        }

        Err(AgentError::IterationsExceeded)
    }

    /// Answer each request of one assistant turn in order. Stops at the first report.
    async fn dispatch_turn(
        &self,
        requests: &[ToolRequest],
        transcript: &mut Transcript,
        searches: &mut Vec<String>,
    ) -> Option<Report> {
        for request in requests {
            let (tool_result, report) =
                match self.dispatch_tool_call(&request.tool_call, searches).await {
                    Ok(ToolOutput { text, report }) => (Ok(text), report),
                    Err(e) => {
                        tracing::warn!(
                            "Tool call {} ({}) failed: {}",
                            request.id,
                            request.tool_call.name,
                            e
                        );
                        (Err(e), None)
                    }
                };

            transcript.push(Message::tool().with_tool_response(request.id.clone(), tool_result));

            if report.is_some() {
                tracing::info!("Report generated");
                return report;
            }
        }
        None
    }

    async fn dispatch_tool_call(
        &self,
        call: &ToolCall,
        searches: &mut Vec<String>,
    ) -> ToolResult<ToolOutput> {
        let arguments: Value = serde_json::from_str(&call.arguments).map_err(|e| {
            ToolError::MalformedArguments(format!(
                "could not parse arguments for {}: {}",
                call.name, e
            ))
        })?;

        if call.name == SEARCH_TOOL_NAME {
            if let Some(query) = query_argument(&arguments) {
                tracing::info!("Searching: {}", query);
                searches.push(query.to_string());
            }
        }

        self.tools.invoke(&call.name, arguments).await
    }
}
