use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;

use crate::models::message::Message;
use crate::models::tool::ToolDescriptor;
use crate::providers::base::{Provider, Usage};

/// A mock provider that returns pre-configured responses for testing
pub struct MockProvider {
    responses: Arc<Mutex<Vec<Result<Message, String>>>>,
    repeat: Option<Message>,
    transcripts: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl MockProvider {
    /// Create a new mock provider with a sequence of responses
    pub fn new(responses: Vec<Message>) -> Self {
        Self::with_results(responses.into_iter().map(Ok).collect())
    }

    /// Create a mock whose responses may also be provider failures
    pub fn with_results(responses: Vec<Result<Message, String>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            repeat: None,
            transcripts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that answers every call with the same message
    pub fn repeating(message: Message) -> Self {
        Self {
            repeat: Some(message),
            ..Self::new(Vec::new())
        }
    }

    /// Number of completions requested so far
    pub fn calls(&self) -> usize {
        self.transcripts.lock().unwrap().len()
    }

    /// Transcript sent on the nth completion request
    pub fn transcript(&self, n: usize) -> Vec<Message> {
        self.transcripts.lock().unwrap()[n].clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(
        &self,
        messages: &[Message],
        _tools: &[ToolDescriptor],
    ) -> Result<(Message, Usage)> {
        self.transcripts.lock().unwrap().push(messages.to_vec());

        if let Some(message) = &self.repeat {
            return Ok((message.clone(), Usage::default()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Return empty response if no more pre-configured responses
            Ok((Message::assistant().with_text(""), Usage::default()))
        } else {
            match responses.remove(0) {
                Ok(message) => Ok((message, Usage::default())),
                Err(e) => Err(anyhow!(e)),
            }
        }
    }
}
