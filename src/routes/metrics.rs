//! Prometheus metrics endpoint
//!
//! Exposes relay metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

use crate::proxy::Route;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

fn register_metrics() {
    metrics::describe_counter!(
        "cors_relay_requests_total",
        "Total number of requests handled by the relay"
    );
    metrics::describe_histogram!(
        "cors_relay_request_duration_seconds",
        "Time until the response head is ready, in seconds"
    );
    metrics::describe_counter!(
        "cors_relay_upstream_errors_total",
        "Upstream calls that failed without producing a response"
    );
}

/// Prometheus metrics endpoint handler
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a handled request
pub fn record_request(method: &str, status: u16, route: Route, duration_secs: f64) {
    metrics::counter!(
        "cors_relay_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "route" => route.as_str()
    )
    .increment(1);
    metrics::histogram!("cors_relay_request_duration_seconds", "route" => route.as_str())
        .record(duration_secs);
}

/// Record an upstream transport failure
pub fn record_upstream_error() {
    metrics::counter!("cors_relay_upstream_errors_total").increment(1);
}
