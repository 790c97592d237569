use anyhow::{Context, Result};
use std::str::FromStr;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MESSAGE: &str = "Hello, World!";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone)]
pub struct Config {
    // OpenAI
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_api_url: String,
    pub openai_max_attempts: u32,

    // Model output bounds
    pub generation_max_tokens: u32,
    pub translation_max_tokens: u32,

    // Run
    pub output_dir: String,
    pub num_programming_languages: usize,
    pub num_spoken_languages: usize,
    pub message: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // OpenAI
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY not set")?,
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_URL.to_string()),
            openai_max_attempts: env_or("OPENAI_MAX_ATTEMPTS", 1),

            // Model output bounds
            generation_max_tokens: env_or("GENERATION_MAX_TOKENS", 50),
            translation_max_tokens: env_or("TRANSLATION_MAX_TOKENS", 500),

            // Run
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string()),
            num_programming_languages: env_or("NUM_PROGRAMMING_LANGUAGES", 5),
            num_spoken_languages: env_or("NUM_SPOKEN_LANGUAGES", 5),
            message: std::env::var("HELLO_MESSAGE")
                .unwrap_or_else(|_| DEFAULT_MESSAGE.to_string()),
        })
    }
}

/// Read and parse an environment variable, falling back to `default` when it
/// is missing or unparseable.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "OPENAI_API_KEY",
        "OPENAI_MODEL",
        "OPENAI_API_URL",
        "OPENAI_MAX_ATTEMPTS",
        "GENERATION_MAX_TOKENS",
        "TRANSLATION_MAX_TOKENS",
        "OUTPUT_DIR",
        "NUM_PROGRAMMING_LANGUAGES",
        "NUM_SPOKEN_LANGUAGES",
        "HELLO_MESSAGE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_api_key() {
        clear_env();
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("OPENAI_API_KEY", "sk-test");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.openai_api_url, DEFAULT_OPENAI_API_URL);
        assert_eq!(config.openai_max_attempts, 1);
        assert_eq!(config.generation_max_tokens, 50);
        assert_eq!(config.translation_max_tokens, 500);
        assert_eq!(config.output_dir, "output");
        assert_eq!(config.num_programming_languages, 5);
        assert_eq!(config.num_spoken_languages, 5);
        assert_eq!(config.message, "Hello, World!");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("OPENAI_API_KEY", "sk-test");
        std::env::set_var("OPENAI_MODEL", "gpt-5-mini");
        std::env::set_var("NUM_PROGRAMMING_LANGUAGES", "2");
        std::env::set_var("NUM_SPOKEN_LANGUAGES", " 3 ");
        std::env::set_var("OUTPUT_DIR", "/tmp/hello");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.openai_model, "gpt-5-mini");
        assert_eq!(config.num_programming_languages, 2);
        assert_eq!(config.num_spoken_languages, 3);
        assert_eq!(config.output_dir, "/tmp/hello");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_numbers_fall_back() {
        clear_env();
        std::env::set_var("OPENAI_API_KEY", "sk-test");
        std::env::set_var("NUM_PROGRAMMING_LANGUAGES", "lots");
        std::env::set_var("GENERATION_MAX_TOKENS", "-1");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.num_programming_languages, 5);
        assert_eq!(config.generation_max_tokens, 50);

        clear_env();
    }
}
