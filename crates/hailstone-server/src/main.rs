//! Hailstone server binary
//!
//! Serves the sequence API and the embedded web frontend.

use hailstone_server::{ApiServer, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hailstone_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting hailstone server");

    let config = ServerConfig::from_env();
    let server = ApiServer::new(config);
    server.serve().await?;

    Ok(())
}
