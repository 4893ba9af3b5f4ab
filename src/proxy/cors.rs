//! CORS annotation and preflight short-circuit

use axum::body::Body;
use axum::http::{
    header::{
        HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
        ACCESS_CONTROL_ALLOW_ORIGIN,
    },
    Method, Response, StatusCode,
};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization, OpenAI-Beta";

/// How an inbound request is handled
///
/// Chosen once from the method; both outcomes produce exactly one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Answer locally with the CORS headers, never contacting upstream
    Preflight,
    /// Dispatch to the upstream and relay its response
    Forward,
}

impl Route {
    pub fn for_method(method: &Method) -> Self {
        if method == Method::OPTIONS {
            Route::Preflight
        } else {
            Route::Forward
        }
    }

    /// Label used in logs and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Preflight => "preflight",
            Route::Forward => "forward",
        }
    }
}

/// The fixed permissive CORS header set
pub fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers
}

/// Answer a CORS preflight: 200, empty body, exactly the CORS headers
pub fn preflight_response() -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::OK;
    *response.headers_mut() = cors_headers();
    response
}
