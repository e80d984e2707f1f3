//! Chat-completion client for recipe generation, pointed at Groq's
//! OpenAI-compatible API.

use anyhow::Context;
use axum::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// System+user prompt pair in, generated text out.
#[async_trait]
pub trait ChatCompletions: Send + Sync {
    /// Run one chat completion with JSON output requested.
    async fn complete_json(&self, system_prompt: &str, user_prompt: &str)
        -> anyhow::Result<String>;
}

#[derive(Clone)]
pub struct GroqClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GroqClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: GROQ_BASE_URL.to_string(),
            api_key,
            model,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[async_trait]
impl ChatCompletions for GroqClient {
    async fn complete_json(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> anyhow::Result<String> {
        let body = json!({
            "model": self.model,
            "temperature": 0.7,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("chat completion request failed")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("chat completion returned {status}: {text}");
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .context("decode chat completion response")?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| anyhow::anyhow!("chat completion returned no choices"))?;

        debug!(len = content.len(), "chat completion received");
        Ok(content)
    }
}
