//! Hailstone Server - HTTP adapter for the sequence engine
//!
//! A thin, stateless wrapper around [`hailstone_core`]: parse a number,
//! compute the sequence, serialize the labelled steps as JSON. Ships a
//! single embedded web page that renders the result as a progressively
//! revealed table and bar chart.
//!
//! # Architecture
//!
//! - **Config**: listen address and step cap, read from the environment
//! - **API**: `POST /api/collatz` plus health and index routes
//! - **Error**: adapter failures rendered as `{"error": ...}` JSON
//!
//! Each request is independent; the shared state is the immutable config,
//! so concurrent requests need no coordination.
//!
//! # Example
//!
//! ```no_run
//! use hailstone_server::{ApiServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), std::io::Error> {
//!     let server = ApiServer::new(ServerConfig::from_env());
//!     server.serve().await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use config::{ServerConfig, DEFAULT_MAX_STEPS};
pub use error::{ApiError, Result};
pub use server::ApiServer;
