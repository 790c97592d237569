use crate::config::Config;
use crate::retry::{retry_if, RetryPolicy};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// OpenAI Chat Completion request
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Non-success HTTP status returned by the completions endpoint
#[derive(Debug, Error)]
#[error("OpenAI API error ({status}): {body}")]
pub struct ApiError {
    pub status: u16,
    pub body: String,
}

/// Reasoning tokens count against `max_completion_tokens`, so small budgets
/// can be spent before any visible output is produced
const REASONING_MIN_COMPLETION_TOKENS: u32 = 4000;

/// Check if a model is a reasoning model that doesn't support temperature
fn is_reasoning_model(model: &str) -> bool {
    model.starts_with("gpt-5")
        || model.starts_with("o1")
        || model.starts_with("o3")
        || model.starts_with("o4")
}

/// Retry 429 and 5xx responses and transport failures, never other 4xx
fn is_retryable_error(error: &anyhow::Error) -> bool {
    match error.downcast_ref::<ApiError>() {
        Some(api) => api.status == 429 || api.status >= 500,
        None => true,
    }
}

/// One prompt sent to the completions endpoint
#[derive(Debug, Clone)]
pub struct Prompt<'a> {
    pub system: &'a str,
    pub user: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Minimal client for an OpenAI-compatible chat completions endpoint
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    retry: RetryPolicy,
}

impl ChatClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            api_url: config.openai_api_url.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            retry: RetryPolicy::model_call(config.openai_max_attempts),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(&self, prompt: &Prompt<'_>) -> ChatRequest {
        // Reasoning models don't support temperature - use reasoning_effort instead
        let is_reasoning = is_reasoning_model(&self.model);
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: prompt.system.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: prompt.user.to_string(),
                },
            ],
            max_completion_tokens: if is_reasoning {
                prompt.max_tokens.max(REASONING_MIN_COMPLETION_TOKENS)
            } else {
                prompt.max_tokens
            },
            temperature: (!is_reasoning).then_some(prompt.temperature),
            reasoning_effort: is_reasoning.then(|| "low".to_string()),
        }
    }

    /// Send `prompt` and return the content of the first choice
    pub async fn complete(&self, operation_name: &str, prompt: &Prompt<'_>) -> Result<String> {
        let request = self.build_request(prompt);

        retry_if(
            &self.retry,
            operation_name,
            || async {
                let response = self
                    .http
                    .post(&self.api_url)
                    .header("Authorization", format!("Bearer {}", self.api_key))
                    .header("Content-Type", "application/json")
                    .json(&request)
                    .send()
                    .await
                    .context("Failed to send request to OpenAI API")?;

                let status = response.status();
                if !status.is_success() {
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
                    return Err(ApiError {
                        status: status.as_u16(),
                        body,
                    }
                    .into());
                }

                let chat_response: ChatResponse = response
                    .json()
                    .await
                    .context("Failed to parse OpenAI response")?;

                let content = chat_response
                    .choices
                    .into_iter()
                    .next()
                    .map(|c| c.message.content)
                    .context("OpenAI response contained no choices")?;

                Ok::<_, anyhow::Error>(content)
            },
            is_retryable_error,
        )
        .await
    }
}
