//! Network transport seam
//!
//! The proxy handler talks to the upstream only through [`Transport`], so
//! tests can swap in a double that records what would have been sent.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderMap, Method, StatusCode};
use reqwest::Url;

use crate::error::AppResult;

/// A fully prepared upstream call
#[derive(Debug)]
pub struct UpstreamRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    /// `None` when the inbound request is known to carry no body
    pub body: Option<Body>,
}

/// The raw upstream answer, body still unread
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Body,
}

/// Issues one upstream call per invocation
///
/// Implementations must stream both bodies and must not retry. A failure
/// to obtain a response is returned as an error; any HTTP status the
/// upstream produces is a successful result.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: UpstreamRequest) -> AppResult<UpstreamResponse>;
}

/// Production transport backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a client with the connection pooling used in production
    pub fn with_defaults() -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: UpstreamRequest) -> AppResult<UpstreamResponse> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(reqwest::Body::wrap_stream(body.into_data_stream()));
        }

        let response = builder.send().await?;

        Ok(UpstreamResponse {
            status: response.status(),
            headers: response.headers().clone(),
            body: Body::from_stream(response.bytes_stream()),
        })
    }
}
