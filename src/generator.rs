use crate::catalog::ProgrammingLanguage;
use crate::config::Config;
use crate::openai::{ChatClient, Prompt};
use anyhow::{bail, Result};
use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;
use tracing::info;

/// Produces a code snippet for a programming language.
#[async_trait]
pub trait CodeGenerator: Send + Sync {
    async fn generate(&self, language: &ProgrammingLanguage) -> Result<String>;
}

const GENERATION_SYSTEM_PROMPT: &str = "You write tiny example programs. \
Reply with the program only, without explanations.";

static CODE_FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
static OPEN_FENCE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Build the user prompt asking for `message` in `language`
fn build_generation_prompt(message: &str, language: &ProgrammingLanguage) -> String {
    format!("Write '{}' in {}.", message, language)
}

/// Pull the body of the first fenced code block out of a reply, or return the
/// trimmed reply when it has none.
///
/// A reply cut off by the token limit can open a fence without closing it;
/// everything after the opening fence line is kept in that case.
fn extract_code(reply: &str) -> &str {
    let fence = CODE_FENCE_REGEX
        .get_or_init(|| Regex::new(r"(?s)```[^\n]*\n(.*?)```").expect("Invalid fence regex"));

    if let Some(body) = fence.captures(reply).and_then(|caps| caps.get(1)) {
        return body.as_str().trim();
    }

    let open_fence = OPEN_FENCE_REGEX
        .get_or_init(|| Regex::new(r"^\s*```[^\n]*(\n|$)").expect("Invalid fence regex"));

    match open_fence.find(reply) {
        Some(opening) => reply[opening.end()..].trim(),
        None => reply.trim(),
    }
}

/// Code generator backed by a chat completions model
#[derive(Debug, Clone)]
pub struct OpenAiCodeGenerator {
    client: ChatClient,
    message: String,
    max_tokens: u32,
}

impl OpenAiCodeGenerator {
    pub fn new(client: ChatClient, config: &Config) -> Self {
        Self {
            client,
            message: config.message.clone(),
            max_tokens: config.generation_max_tokens,
        }
    }
}

#[async_trait]
impl CodeGenerator for OpenAiCodeGenerator {
    async fn generate(&self, language: &ProgrammingLanguage) -> Result<String> {
        info!("Generating '{}' code in {}...", self.message, language);

        let user = build_generation_prompt(&self.message, language);
        let reply = self
            .client
            .complete(
                &format!("Code generation for {}", language),
                &Prompt {
                    system: GENERATION_SYSTEM_PROMPT,
                    user: &user,
                    max_tokens: self.max_tokens,
                    temperature: 0.7,
                },
            )
            .await?;

        let code = extract_code(&reply);
        if code.is_empty() {
            bail!("Model returned an empty snippet");
        }
        Ok(code.to_string())
    }
}
