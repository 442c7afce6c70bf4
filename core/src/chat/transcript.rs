use serde::{Deserialize, Serialize};

pub const GREETING: &str =
    "Hi! Ask me questions about the exponential model, the graph, or what the results mean.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Append-only chat history for one session, seeded with the greeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: vec![Message {
                role: Role::Assistant,
                content: GREETING.to_string(),
            }],
        }
    }

    /// Appends a user turn followed by the assistant's reply.
    pub fn push_exchange(&mut self, question: &str, response: &str) {
        self.messages.push(Message {
            role: Role::User,
            content: question.to_string(),
        });
        self.messages.push(Message {
            role: Role::Assistant,
            content: response.to_string(),
        });
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
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].role, Role::Assistant);
        assert_eq!(transcript.messages()[0].content, GREETING);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&Transcript::new().messages()[0]).unwrap();
        assert!(json.contains(r#""role":"assistant""#));
    }
}
