//! Mock upstream API for testing
//!
//! Wraps a wiremock server that answers like the OpenAI API and records
//! every request the relay forwards to it.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::mocks::upstream::MockUpstream;
//!
//! #[tokio::test]
//! async fn test_with_upstream_mock() {
//!     let upstream = MockUpstream::start().await;
//!     upstream.mock_list_models().await;
//!
//!     // Use upstream.uri() as the relay's upstream origin
//!     // ...
//! }
//! ```

#![allow(dead_code)]

use serde_json::json;
use wiremock::{
    matchers::{any, method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Mock upstream server wrapper
pub struct MockUpstream {
    server: MockServer,
}

impl MockUpstream {
    /// Start a new mock upstream server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Requests the server has received so far
    pub async fn received(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    // =========================================================================
    // GET /v1/models
    // =========================================================================

    /// Mock a successful model listing with typical OpenAI response headers
    pub async fn mock_list_models(&self) {
        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("openai-organization", "org-test")
                    .insert_header("openai-processing-ms", "35")
                    .insert_header("x-request-id", "req_123")
                    .insert_header("server", "cloudflare")
                    .set_body_json(json!({
                        "object": "list",
                        "data": [
                            {
                                "id": "gpt-4o",
                                "object": "model",
                                "created": 1706745600,
                                "owned_by": "openai"
                            }
                        ]
                    })),
            )
            .mount(&self.server)
            .await;
    }

    // =========================================================================
    // POST /v1/chat/completions
    // =========================================================================

    /// Mock a rate-limited chat completion
    pub async fn mock_rate_limited(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(429)
                    .insert_header("x-ratelimit-remaining", "0")
                    .insert_header("x-ratelimit-reset-requests", "20s")
                    .insert_header("set-cookie", "s=1")
                    .set_body_raw(
                        r#"{"error":{"message":"Rate limit reached","type":"requests"}}"#,
                        "application/json",
                    ),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a streaming chat completion (SSE body, passed through verbatim)
    pub async fn mock_chat_stream(&self, sse_body: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("cache-control", "no-cache")
                    .set_body_raw(sse_body.to_string(), "text/event-stream"),
            )
            .mount(&self.server)
            .await;
    }

    // =========================================================================
    // Catch-all
    // =========================================================================

    /// Answer every request with the given status and raw body
    pub async fn mock_any(&self, status: u16, body: Vec<u8>, content_type: &str) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(status).set_body_raw(body, content_type))
            .mount(&self.server)
            .await;
    }

    /// Fail the test on drop if any request reaches the server
    pub async fn expect_no_requests(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_models_mock_answers_directly() {
        let upstream = MockUpstream::start().await;
        upstream.mock_list_models().await;

        let response = reqwest::get(format!("{}/v1/models", upstream.uri()))
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["openai-organization"], "org-test");
        assert_eq!(upstream.received().await.len(), 1);
    }

    #[tokio::test]
    async fn test_rate_limited_mock_has_single_content_type() {
        let upstream = MockUpstream::start().await;
        upstream.mock_rate_limited().await;

        let response = reqwest::Client::new()
            .post(format!("{}/v1/chat/completions", upstream.uri()))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 429);
        assert_eq!(
            response.headers().get_all("content-type").iter().count(),
            1
        );
    }
}
