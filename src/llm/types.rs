use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
    pub content: String,
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: &str) -> Self {
        Self { role: "system".to_string(), content: content.to_string() }
    }
    pub fn user(content: &str) -> Self {
        Self { role: "user".to_string(), content: content.to_string() }
    }

    /// System message (when given) followed by the user prompt.
    pub fn exchange(prompt: &str, system: Option<&str>) -> Vec<Self> {
        let mut messages = Vec::with_capacity(2);
        if let Some(sys) = system {
            messages.push(Self::system(sys));
        }
        messages.push(Self::user(prompt));
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_with_system() {
        let messages = Message::exchange("summarize", Some("be brief"));
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1], Message::user("summarize"));
    }

    #[test]
    fn test_exchange_without_system() {
        let messages = Message::exchange("summarize", None);
        assert_eq!(messages, vec![Message::user("summarize")]);
    }
}
