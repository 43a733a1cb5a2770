/// Chat assistant backed by Groq's OpenAI-compatible chat completions API
///
/// The assistant is a non-critical page feature: callers decide how to degrade
/// when it errors, so failures surface as plain `AppError`s here.
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

const SYSTEM_PROMPT: &str = "You are a concise movie and TV discovery assistant. \
    Recommend titles, explain what they are about, and answer questions about \
    movies, shows, and anime. Keep answers short and conversational.";

const MAX_TOKENS: u32 = 1024;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<AssistantMessage>,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

pub struct ChatAssistant {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl ChatAssistant {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            model,
        }
    }

    /// Sends the conversation plus the new user message, returns the reply text
    pub async fn reply(&self, history: &[ChatMessage], user_message: &str) -> AppResult<String> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage {
            role: "system".to_string(),
            content: SYSTEM_PROMPT.to_string(),
        });
        messages.extend(history.iter().cloned());
        messages.push(ChatMessage::user(user_message));

        let url = format!("{}/chat/completions", self.api_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest {
                model: &self.model,
                messages,
                max_tokens: MAX_TOKENS,
                temperature: TEMPERATURE,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Groq returned status {}: {}",
                status, body
            )));
        }

        let payload: ChatResponse = response.json().await?;

        let reply = extract_content(payload).ok_or_else(|| {
            AppError::ExternalApi("Chat response contained no content".to_string())
        })?;

        tracing::info!(model = %self.model, reply_chars = reply.len(), "Chat reply received");

        Ok(reply)
    }
}

/// Pulls the first choice's message text out of a chat completion payload
fn extract_content(response: ChatResponse) -> Option<String> {
    response
        .choices
        .and_then(|choices| choices.into_iter().next())
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
}
