use std::sync::Arc;

use pantry_server::{config::ServerConfig, relay::SmtpRelay};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::load();
    let relay = SmtpRelay::new(&config.smtp)?;
    pantry_server::start_server(config, Arc::new(relay)).await?;
    Ok(())
}
