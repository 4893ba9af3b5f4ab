//! Request logging for relayed calls
//!
//! Structured diagnostic output with a short correlation id per invocation.
//! Everything goes through `tracing`, so the subscriber installed by the host
//! decides where (or whether) it ends up.

use std::time::Instant;

use axum::http::{HeaderMap, Method, StatusCode};
use tracing::{debug, error, info, Span};
use uuid::Uuid;

use super::headers::redacted;

/// Context for tracking one request through the relay
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request (for log correlation)
    pub trace_id: String,
    /// When the request started
    pub start_time: Instant,
    pub method: Method,
    /// Inbound path, without the query string
    pub path: String,
}

impl RequestContext {
    pub fn new(method: &Method, path: &str) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(), // Short ID for readability
            start_time: Instant::now(),
            method: method.clone(),
            path: path.to_string(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Log a preflight answered locally
    pub fn log_preflight(&self) {
        debug!(
            trace_id = %self.trace_id,
            path = %self.path,
            "Answered CORS preflight"
        );
    }

    /// Log the request about to be sent upstream
    pub fn log_upstream_request(&self, url: &str, headers: &HeaderMap) {
        info!(
            trace_id = %self.trace_id,
            method = %self.method,
            url = %url,
            headers = ?redacted(headers),
            "Sending request to upstream"
        );
    }

    /// Log the upstream status and headers
    pub fn log_upstream_response(&self, status: StatusCode, headers: &HeaderMap) {
        info!(
            trace_id = %self.trace_id,
            method = %self.method,
            path = %self.path,
            status = %status.as_u16(),
            headers = ?redacted(headers),
            elapsed_ms = %self.elapsed_ms(),
            "Response received from upstream"
        );
    }

    /// Log a transport failure (connect, DNS, TLS, timeout)
    pub fn log_connection_error(&self, error: &str, url: &str) {
        error!(
            trace_id = %self.trace_id,
            method = %self.method,
            url = %url,
            elapsed_ms = %self.elapsed_ms(),
            error = %error,
            "Connection to upstream failed"
        );
    }

    /// Create a tracing span for this request
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "relay_request",
            trace_id = %self.trace_id,
            method = %self.method,
            path = %self.path,
        )
    }
}
