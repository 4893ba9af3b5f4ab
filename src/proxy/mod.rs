//! Proxy module
//!
//! The relay core: one inbound request in, one client response out.
//! `OPTIONS` is answered locally; every other method is forwarded to the
//! configured upstream origin with headers allow-listed in both directions.

pub mod cors;
pub mod dispatcher;
pub mod headers;
pub mod logging;
pub mod response;
pub mod transport;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, Uri};
use tracing::Instrument;

pub use cors::Route;
pub use dispatcher::UpstreamOrigin;
pub use transport::{ReqwestTransport, Transport, UpstreamRequest, UpstreamResponse};

use crate::error::AppResult;
use logging::RequestContext;

/// Stateless request handler bound to one upstream origin
#[derive(Clone)]
pub struct ProxyHandler {
    origin: UpstreamOrigin,
    transport: Arc<dyn Transport>,
}

impl ProxyHandler {
    pub fn new(origin: UpstreamOrigin, transport: Arc<dyn Transport>) -> Self {
        Self { origin, transport }
    }

    pub fn origin(&self) -> &UpstreamOrigin {
        &self.origin
    }

    /// Handle a request using its own URI as the target
    pub async fn handle(&self, request: Request<Body>) -> AppResult<Response<Body>> {
        let target = request.uri().clone();
        self.handle_with_target(&target, request).await
    }

    /// Handle a request whose path and query are given by `target`
    ///
    /// Hosts that mount the relay under a nested router pass the original,
    /// unstripped URI here.
    pub async fn handle_with_target(
        &self,
        target: &Uri,
        request: Request<Body>,
    ) -> AppResult<Response<Body>> {
        let ctx = RequestContext::new(request.method(), target.path());

        match Route::for_method(request.method()) {
            Route::Preflight => {
                ctx.log_preflight();
                Ok(cors::preflight_response())
            }
            Route::Forward => {
                let span = ctx.create_span();
                self.forward(&ctx, target, request).instrument(span).await
            }
        }
    }

    async fn forward(
        &self,
        ctx: &RequestContext,
        target: &Uri,
        request: Request<Body>,
    ) -> AppResult<Response<Body>> {
        let (parts, body) = request.into_parts();
        let upstream_request =
            dispatcher::build_upstream_request(&self.origin, target, &parts, body)?;

        let url = upstream_request.url.to_string();
        ctx.log_upstream_request(&url, &upstream_request.headers);

        let upstream = self.transport.send(upstream_request).await.map_err(|e| {
            ctx.log_connection_error(&e.to_string(), &url);
            e
        })?;

        ctx.log_upstream_response(upstream.status, &upstream.headers);

        Ok(response::assemble_response(upstream))
    }
}
