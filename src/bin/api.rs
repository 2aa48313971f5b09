use context_chat_relay::{api::start_server, config::RelayConfig, relay::ChatRelay};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // A missing .env is fatal
    if let Err(e) = dotenv::dotenv() {
        error!("Error loading .env file: {}", e);
        std::process::exit(1);
    }

    let config = match RelayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!("Context Chat Relay - API Server");
    info!(port = config.port, model = %config.gemini_model, "Configuration loaded");

    let relay = Arc::new(ChatRelay::from_config(&config)?);

    start_server(relay, &config.static_dir, config.port).await?;

    Ok(())
}
