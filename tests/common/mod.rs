//! Common test utilities for the relay
//!
//! Builds the real router around a relay pointed at a test upstream.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use cors_relay::{routes, AppState, Config, UpstreamOrigin};

/// Test configuration constants
pub mod constants {
    /// Bearer credential sent by the simulated browser client
    pub const TEST_AUTHORIZATION: &str = "Bearer sk-test-123";
    /// Origin of the simulated browser client
    pub const TEST_BROWSER_ORIGIN: &str = "https://app.example.com";
    /// Address nothing listens on, for transport failure tests
    pub const UNREACHABLE_UPSTREAM: &str = "http://127.0.0.1:1";
}

/// Relay configuration pointing at `upstream_uri`
pub fn test_config(upstream_uri: &str) -> Config {
    let origin = UpstreamOrigin::parse(upstream_uri).expect("Invalid test upstream URI");
    Config::for_upstream(origin)
}

/// Start a test server running the full router against `upstream_uri`
pub fn relay_server(upstream_uri: &str) -> TestServer {
    relay_server_with_config(test_config(upstream_uri))
}

/// Start a test server with a caller-tweaked configuration
pub fn relay_server_with_config(config: Config) -> TestServer {
    let state = Arc::new(AppState::new(config).expect("Failed to create app state"));
    let app = routes::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}
