//! CORS preflight integration tests
//!
//! `OPTIONS` on any relayed path is answered by the relay itself.

use axum::http::{HeaderName, HeaderValue, Method, StatusCode};

use crate::common::{constants, relay_server};
use crate::mocks::MockUpstream;

#[tokio::test]
async fn test_preflight_is_answered_without_upstream_call() {
    let upstream = MockUpstream::start().await;
    upstream.expect_no_requests().await;
    let server = relay_server(&upstream.uri());

    let response = server
        .method(Method::OPTIONS, "/v1/chat/completions")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static(constants::TEST_BROWSER_ORIGIN),
        )
        .add_header(
            HeaderName::from_static("access-control-request-method"),
            HeaderValue::from_static("POST"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-headers"),
            HeaderValue::from_static("authorization, content-type, openai-beta"),
        )
        .await;

    response.assert_status(StatusCode::OK);
    assert!(response.as_bytes().is_empty());

    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(
        headers["access-control-allow-headers"],
        "Content-Type, Authorization, OpenAI-Beta"
    );

    assert!(upstream.received().await.is_empty());
}

#[tokio::test]
async fn test_preflight_works_for_any_path() {
    let upstream = MockUpstream::start().await;
    let server = relay_server(&upstream.uri());

    for path in ["/", "/v1/threads/thread_abc/runs", "/does/not/exist"] {
        let response = server.method(Method::OPTIONS, path).await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    assert!(upstream.received().await.is_empty());
}
