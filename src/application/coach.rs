use crate::domain::ports::coach_provider::CoachProvider;
use crate::domain::values::coach::{
    ChatMessage, ChatRole, CoachMode, CoachRequest, COACH_SYSTEM_INSTRUCTION,
};
use crate::domain::values::language::Language;
use std::sync::Arc;

pub struct CoachUseCase {
    provider: Arc<dyn CoachProvider>,
}

impl CoachUseCase {
    pub fn new(provider: Arc<dyn CoachProvider>) -> Self {
        Self { provider }
    }

    /// Always returns something to show: failures and empty replies become
    /// the localized fallback message.
    pub async fn ask(&self, prompt: &str, language: Language, mode: CoachMode) -> String {
        let fallback = language.translations().coach_fallback;
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return fallback.to_string();
        }

        let request = CoachRequest {
            prompt: prompt.to_string(),
            system_instruction: COACH_SYSTEM_INSTRUCTION,
            mode,
        };
        match self.provider.generate(&request).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::warn!(provider = self.provider.name(), "empty response from coach");
                fallback.to_string()
            }
            Err(e) => {
                tracing::warn!(provider = self.provider.name(), error = %e, "coach request failed");
                fallback.to_string()
            }
        }
    }

    /// The coach's opening line.
    pub fn greeting(language: Language) -> ChatMessage {
        ChatMessage {
            role: ChatRole::Model,
            text: language.translations().coach_intro.to_string(),
        }
    }

    /// One exchange seeded with the greeting: `[greeting, prompt, reply]`.
    pub async fn converse(&self, prompt: &str, language: Language, mode: CoachMode) -> Vec<ChatMessage> {
        let reply = self.ask(prompt, language, mode).await;
        vec![
            Self::greeting(language),
            ChatMessage {
                role: ChatRole::User,
                text: prompt.trim().to_string(),
            },
            ChatMessage {
                role: ChatRole::Model,
                text: reply,
            },
        ]
    }
}
