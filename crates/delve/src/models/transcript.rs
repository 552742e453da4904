use std::collections::HashSet;

use super::message::{Message, MessageContent};
use super::role::Role;

/// The conversation exchanged with the model while answering one question.
///
/// Every tool request made by the assistant has to be answered by a tool message
/// carrying the same id before the model is queried again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Seed a transcript with the operating instructions and the caller's question
    pub fn new<S: Into<String>, Q: Into<String>>(system_prompt: S, question: Q) -> Self {
        Self {
            messages: vec![
                Message::system().with_text(system_prompt),
                Message::user().with_text(question),
            ],
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Ids of tool requests from the latest assistant turn that have no matching tool response
    pub fn unanswered_tool_requests(&self) -> Vec<String> {
        let Some(turn) = self
            .messages
            .iter()
            .rposition(|m| m.role == Role::Assistant)
        else {
            return Vec::new();
        };

        let answered: HashSet<&str> = self.messages[turn + 1..]
            .iter()
            .filter(|m| m.role == Role::Tool)
            .flat_map(|m| m.content.iter())
            .filter_map(MessageContent::as_tool_response)
            .map(|r| r.id.as_str())
            .collect();

        self.messages[turn]
            .tool_requests()
            .into_iter()
            .filter(|r| !answered.contains(r.id.as_str()))
            .map(|r| r.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tool::ToolCall;

    #[test]
    fn test_seeded_transcript() {
        let transcript = Transcript::new("instructions", "question?");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].role, Role::System);
        assert_eq!(transcript.messages()[1].role, Role::User);
        assert!(transcript.unanswered_tool_requests().is_empty());
    }

    #[test]
    fn test_unanswered_tool_requests() {
        let mut transcript = Transcript::new("instructions", "question?");
        transcript.push(
            Message::assistant()
                .with_tool_request("a", ToolCall::new("search_web", "{}"))
                .with_tool_request("b", ToolCall::new("search_web", "{}")),
        );
        assert_eq!(transcript.unanswered_tool_requests(), vec!["a", "b"]);

        transcript.push(Message::tool().with_tool_response("a", Ok("done".to_string())));
        assert_eq!(transcript.unanswered_tool_requests(), vec!["b"]);

        transcript.push(Message::tool().with_tool_response("b", Ok("done".to_string())));
        assert!(transcript.unanswered_tool_requests().is_empty());
    }

    #[test]
    fn test_only_latest_turn_is_checked() {
        let mut transcript = Transcript::new("instructions", "question?");
        transcript.push(Message::assistant().with_tool_request("old", ToolCall::new("x", "{}")));
        transcript.push(Message::tool().with_tool_response("old", Ok(String::new())));
        transcript.push(Message::assistant().with_tool_request("new", ToolCall::new("x", "{}")));
        assert_eq!(transcript.unanswered_tool_requests(), vec!["new"]);
    }
}
