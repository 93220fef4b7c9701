//! Server wiring: bind the listener and run the router.

use crate::api;
use crate::config::ServerConfig;
use axum::Router;
use std::sync::Arc;

/// The hailstone HTTP server.
pub struct ApiServer {
    state: Arc<ServerConfig>,
}

impl ApiServer {
    /// Create a new server from config.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            state: Arc::new(config),
        }
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        api::build_router(self.state.clone())
    }

    /// Run the server on the configured address.
    pub async fn serve(self) -> Result<(), std::io::Error> {
        let addr = self.state.api_addr;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("HTTP server listening on {}", addr);
        tracing::info!("  step cap: {}", self.state.max_steps);
        axum::serve(listener, self.router()).await
    }
}
