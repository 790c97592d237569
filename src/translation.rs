use crate::catalog::SpokenLanguage;
use crate::config::Config;
use crate::openai::{ChatClient, Prompt};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Translates English text into a spoken language identified by its code.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: &str) -> Result<String>;
}

/// Build the system prompt for translation
fn build_translation_system_prompt(target: &SpokenLanguage) -> String {
    format!(
        r#"You are a professional translator. Translate the following text from English to {} ({}).

### Rules:
- The text is a short program or a snippet of one
- Keep code, keywords, identifiers and punctuation exactly as they are
- Translate comments, prose and the contents of string literals
- Keep line breaks and indentation
- Reply with the translation only"#,
        target.name, target.native_name
    )
}

/// Build the user prompt for translation
fn build_translation_user_prompt(text: &str, target: &SpokenLanguage) -> String {
    format!("Please translate the following text to {}:\n\n{}", target.name, text)
}

/// Translator backed by a chat completions model
#[derive(Debug, Clone)]
pub struct OpenAiTranslator {
    client: ChatClient,
    max_tokens: u32,
}

impl OpenAiTranslator {
    pub fn new(client: ChatClient, config: &Config) -> Self {
        Self {
            client,
            max_tokens: config.translation_max_tokens,
        }
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    /// Translate `text` into the language with code `target`.
    ///
    /// Codes outside the supported set fail before any request is made.
    async fn translate(&self, text: &str, target: &str) -> Result<String> {
        let language = SpokenLanguage::from_code(target)?;

        info!("Translating text to {} ({})...", language.name, language.code);

        let system = build_translation_system_prompt(&language);
        let user = build_translation_user_prompt(text, &language);
        let translated = self
            .client
            .complete(
                &format!("Translation to {}", language.name),
                &Prompt {
                    system: &system,
                    user: &user,
                    max_tokens: self.max_tokens,
                    temperature: 0.3,
                },
            )
            .await?;

        Ok(translated.trim().to_string())
    }
}
