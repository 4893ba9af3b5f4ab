//! Client response assembly for forwarded requests

use axum::body::Body;
use axum::http::Response;

use super::cors::cors_headers;
use super::headers::{pick_headers, HeaderRule, RESPONSE_HEADER_RULES};
use super::transport::UpstreamResponse;

/// Build the client-facing response from the upstream one
///
/// Status and body pass through untouched. Headers start from the CORS set
/// and the allow-listed upstream headers are laid over it, replacing any
/// CORS entry with the same name.
pub fn assemble_response(upstream: UpstreamResponse) -> Response<Body> {
    assemble_response_with_rules(upstream, &RESPONSE_HEADER_RULES)
}

/// Same as [`assemble_response`] with a caller-chosen response allow-list
pub fn assemble_response_with_rules(
    upstream: UpstreamResponse,
    rules: &[HeaderRule],
) -> Response<Body> {
    let mut headers = cors_headers();
    headers.extend(pick_headers(&upstream.headers, rules));

    let mut response = Response::new(upstream.body);
    *response.status_mut() = upstream.status;
    *response.headers_mut() = headers;
    response
}
