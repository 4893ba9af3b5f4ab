//! Configuration management for the relay
//!
//! Configuration is loaded from environment variables.

use anyhow::{bail, Context, Result};
use std::env;

use crate::proxy::UpstreamOrigin;

/// Default upstream API origin
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.openai.com";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => bail!("Invalid RELAY_LOG_FORMAT: {other} (expected text or json)"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Origin all relayed requests are sent to
    pub upstream: UpstreamOrigin,

    pub log_format: LogFormat,

    /// Serve Prometheus metrics on `/metrics`
    pub metrics_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let upstream_url =
            env::var("UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());

        Ok(Self {
            host: env::var("RELAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("RELAY_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid RELAY_PORT")?,

            upstream: UpstreamOrigin::parse(&upstream_url).context("Invalid UPSTREAM_URL")?,

            log_format: LogFormat::parse(
                &env::var("RELAY_LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            )?,

            metrics_enabled: env::var("RELAY_METRICS_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
        })
    }

    /// Configuration pointing at the given upstream with default settings
    pub fn for_upstream(upstream: UpstreamOrigin) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            upstream,
            log_format: LogFormat::Text,
            metrics_enabled: false,
        }
    }
}
