//! In-memory chat transcript. Nothing here is persisted; the transcript
//! lives only as long as the session holding it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Ordered list of messages with monotonically increasing ids.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user message and returns its id.
    pub fn push_user(&mut self, text: impl Into<String>) -> u64 {
        self.push(ChatRole::User, text.into())
    }

    /// Appends a model message and returns its id.
    pub fn push_model(&mut self, text: impl Into<String>) -> u64 {
        self.push(ChatRole::Model, text.into())
    }

    fn push(
        &mut self,
        role: ChatRole,
        text: String,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            text,
            timestamp: Utc::now(),
        });
        id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages_get_sequential_ids() {
        let mut transcript = Transcript::new();
        transcript.push_user("What is a tax bracket?");
        transcript.push_model("A marginal rate band.");
        transcript.push_user("Thanks");

        let ids: Vec<u64> = transcript.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn roles_alternate_as_pushed() {
        let mut transcript = Transcript::new();
        transcript.push_user("hi");
        transcript.push_model("hello");

        assert_eq!(transcript.messages()[0].role, ChatRole::User);
        assert_eq!(transcript.messages()[1].role, ChatRole::Model);
    }

    #[test]
    fn new_transcript_is_empty() {
        let transcript = Transcript::new();

        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }
}
