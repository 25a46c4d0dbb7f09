use std::sync::LazyLock;

use super::prompts;

/// Chat roles understood by the prompt sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged entry in the conversation context.
#[derive(Debug, Clone)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        PromptMessage {
            role,
            content: content.into(),
        }
    }
}

/// Fixed conversation prefix: the system instruction plus the one-shot
/// diff/message exchange. Built once, cloned per request, never mutated.
static BASE_PROMPT: LazyLock<Vec<PromptMessage>> = LazyLock::new(|| {
    vec![
        PromptMessage::new(Role::System, prompts::SYSTEM_INSTRUCTIONS),
        PromptMessage::new(Role::User, prompts::EXAMPLE_DIFF),
        PromptMessage::new(Role::Assistant, prompts::EXAMPLE_COMMIT_MESSAGE),
    ]
});

/// Extend the fixed prefix with the caller's staged diff as the final
/// user entry.
pub fn commit_message_prompt(diff: &str) -> Vec<PromptMessage> {
    let mut messages = BASE_PROMPT.clone();
    messages.push(PromptMessage::new(Role::User, diff));
    messages
}
