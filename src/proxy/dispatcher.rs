//! Upstream request construction
//!
//! Rewrites the inbound request target onto the configured origin and
//! applies the request header allow-list.

use std::fmt;

use anyhow::{bail, Context};
use axum::body::{Body, HttpBody};
use axum::http::{request::Parts, Uri};
use reqwest::Url;

use super::headers::{pick_headers, REQUEST_HEADER_RULES};
use super::transport::UpstreamRequest;
use crate::error::{AppError, AppResult};

/// The origin every request is forwarded to, e.g. `https://api.openai.com`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamOrigin {
    base: Url,
}

impl UpstreamOrigin {
    /// Parse an absolute http(s) URL; any path or query it carries is ignored
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        let base = Url::parse(input).with_context(|| format!("Invalid upstream URL: {input}"))?;

        if !matches!(base.scheme(), "http" | "https") {
            bail!("Upstream URL must use http or https: {input}");
        }
        if base.host_str().is_none() {
            bail!("Upstream URL must include a host: {input}");
        }

        Ok(Self { base })
    }

    /// Map an inbound request target onto this origin
    ///
    /// Path and query are taken verbatim; scheme, host and port always come
    /// from the origin, even for targets like `//other.host/x`.
    pub fn resolve(&self, target: &Uri) -> AppResult<Url> {
        let path = target.path();
        if !path.starts_with('/') {
            return Err(AppError::BadRequest(format!(
                "Request target has no absolute path: {target}"
            )));
        }

        let mut url = self.base.clone();
        url.set_path(path);
        url.set_query(target.query());
        url.set_fragment(None);
        Ok(url)
    }
}

impl fmt::Display for UpstreamOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base.origin().ascii_serialization())
    }
}

/// Turn the inbound request into the upstream call
///
/// Method is preserved, headers are allow-listed, and the body is handed
/// over as-is so it streams through without being collected.
pub fn build_upstream_request(
    origin: &UpstreamOrigin,
    target: &Uri,
    parts: &Parts,
    body: Body,
) -> AppResult<UpstreamRequest> {
    let url = origin.resolve(target)?;
    let headers = pick_headers(&parts.headers, &REQUEST_HEADER_RULES);

    let body = if body.size_hint().exact() == Some(0) {
        None
    } else {
        Some(body)
    };

    Ok(UpstreamRequest {
        method: parts.method.clone(),
        url,
        headers,
        body,
    })
}
