use anyhow::{Context, Result};
use cognitive_compiler::{
    catalog::Catalog, compiler::Compiler, config::Config, generator::OpenAiCodeGenerator,
    openai::ChatClient, report::format_report, translation::OpenAiTranslator,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cognitive_compiler=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!("Using model {}", config.openai_model);

    let client = ChatClient::new(reqwest::Client::new(), &config);
    let compiler = Compiler::new(
        Catalog::default(),
        OpenAiCodeGenerator::new(client.clone(), &config),
        OpenAiTranslator::new(client, &config),
    );

    info!("Creating output directory at {}...", config.output_dir);
    let result = compiler
        .compile(
            &config.output_dir,
            config.num_programming_languages,
            config.num_spoken_languages,
        )
        .await
        .context("Compile run failed")?;

    print!("{}", format_report(&result));
    Ok(())
}
