//! HTTP routes for the relay
//!
//! Health and metrics are served locally; every other path and method
//! falls through to the relay handler.

pub mod health;
pub mod metrics;
pub mod proxy;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Create the main application router
///
/// No compression or CORS layer is applied here: relayed bodies must reach
/// the client byte for byte, and CORS headers come from the proxy core.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Local routes still answer OPTIONS like every relayed path.
    let mut local_routes = Router::new()
        .route(
            "/health",
            get(health::health_check).options(proxy::preflight_handler),
        )
        .route(
            "/health/ready",
            get(health::readiness_check).options(proxy::preflight_handler),
        )
        .route(
            "/health/live",
            get(health::liveness_check).options(proxy::preflight_handler),
        );

    if state.config.metrics_enabled {
        local_routes = local_routes.route(
            "/metrics",
            get(metrics::prometheus_metrics).options(proxy::preflight_handler),
        );
    }

    local_routes
        .fallback(proxy::relay_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
