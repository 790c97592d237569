//! Model smoke check - sends a single prompt to the configured model and
//! prints whatever comes back, without touching the output directory.
//!
//! Usage:
//!   cargo run --bin check-model
//!
//! Required environment variables:
//! - OPENAI_API_KEY
//!
//! Optional:
//! - OPENAI_MODEL (defaults to gpt-4o-mini)
//! - OPENAI_API_URL
//! - GENERATION_MAX_TOKENS (defaults to 50)
//! - HELLO_MESSAGE (defaults to "Hello, World!")

use anyhow::Result;
use cognitive_compiler::{
    config::Config,
    openai::{ChatClient, Prompt},
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cognitive_compiler=info".parse()?)
                .add_directive("check_model=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let client = ChatClient::new(reqwest::Client::new(), &config);

    info!("Generating text with {}...", client.model());
    let prompt = Prompt {
        system: "Continue the text.",
        user: &config.message,
        max_tokens: config.generation_max_tokens,
        temperature: 0.7,
    };

    // A failing model is reported, not fatal
    match client.complete("Model check", &prompt).await {
        Ok(text) => println!("Generated text: {}", text),
        Err(e) => error!("Error during model check: {:#}", e),
    }

    Ok(())
}
