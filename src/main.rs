use anyhow::Result;
use ssr_greeter::{config::Config, i18n::LanguageRegistry, server};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ssr_greeter=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    // The registry must be complete before the first request is accepted
    let registry = Arc::new(LanguageRegistry::builtin()?);
    info!(
        "Registered languages: {}",
        registry.acceptable_languages().join(", ")
    );

    server::serve(&config, registry).await
}
