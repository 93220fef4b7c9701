//! Server configuration.
//!
//! The engine itself takes the step cap as an explicit parameter; the
//! deployment default lives here and nowhere else.

use std::net::SocketAddr;

/// Default truncation threshold applied to API requests.
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// Configuration for the hailstone server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen address
    pub api_addr: SocketAddr,

    /// Maximum transformation steps per computed sequence
    pub max_steps: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ServerConfig {
    /// Create config from environment variables with sensible defaults.
    ///
    /// - `HAILSTONE_API_ADDR` - listen address (default `0.0.0.0:3000`)
    /// - `HAILSTONE_MAX_STEPS` - step cap (default 1000)
    pub fn from_env() -> Self {
        let api_addr = std::env::var("HAILSTONE_API_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .expect("Invalid HAILSTONE_API_ADDR");

        let max_steps = std::env::var("HAILSTONE_MAX_STEPS")
            .map(|s| s.parse().expect("Invalid HAILSTONE_MAX_STEPS"))
            .unwrap_or(DEFAULT_MAX_STEPS);

        Self { api_addr, max_steps }
    }
}
