//! Cors Relay - CORS-enabling reverse proxy for the OpenAI API
//!
//! Lets browser applications call a third-party API that does not answer
//! cross-origin requests itself. Each request is forwarded to a fixed
//! upstream origin with allow-listed headers, and the response comes back
//! with permissive CORS headers. Bodies stream through untouched.

pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::proxy::{ProxyHandler, ReqwestTransport, Transport, UpstreamOrigin};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Relay core bound to the configured upstream
    pub proxy: ProxyHandler,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        let transport = ReqwestTransport::with_defaults()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create application state around a caller-supplied transport
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        let proxy = ProxyHandler::new(config.upstream.clone(), transport);

        Self {
            config,
            start_time: Instant::now(),
            proxy,
        }
    }
}
