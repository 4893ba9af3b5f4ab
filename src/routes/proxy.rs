//! Relay handler
//!
//! Catch-all route that hands every unmatched request to the proxy core.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{OriginalUri, Request, State},
    response::Response,
};

use crate::{
    error::AppError,
    proxy::{cors, Route},
    routes::metrics,
    AppState,
};

/// Relay any request to the upstream origin
///
/// `OPTIONS` is answered locally. Upstream 4xx/5xx come back as ordinary
/// responses; only transport failures and malformed targets become errors.
pub async fn relay_handler(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    request: Request,
) -> Result<Response, AppError> {
    let start_time = Instant::now();
    let method = request.method().clone();
    let route = Route::for_method(&method);

    let result = state.proxy.handle_with_target(&uri, request).await;
    let duration = start_time.elapsed().as_secs_f64();

    match &result {
        Ok(response) => {
            metrics::record_request(method.as_str(), response.status().as_u16(), route, duration)
        }
        Err(err) => {
            metrics::record_request(
                method.as_str(),
                err.status_and_code().0.as_u16(),
                route,
                duration,
            );
            if matches!(err, AppError::Upstream(_)) {
                metrics::record_upstream_error();
            }
        }
    }

    result
}

/// Preflight answer for paths served locally instead of relayed
pub async fn preflight_handler() -> Response {
    let response = cors::preflight_response();
    metrics::record_request("OPTIONS", response.status().as_u16(), Route::Preflight, 0.0);
    response
}
