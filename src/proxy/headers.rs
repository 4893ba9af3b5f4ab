//! Header allow-listing for both proxy directions
//!
//! Every header that crosses the relay must match at least one
//! [`HeaderRule`]. Anything else (cookies, host, user-agent, hop-by-hop
//! headers, preflight-only headers) is dropped.

use axum::http::header::{HeaderMap, HeaderName, AUTHORIZATION, CONTENT_TYPE};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// A single match rule for a header name
///
/// Both variants match case-insensitively.
#[derive(Debug, Clone)]
pub enum HeaderRule {
    /// Exact header name
    Exact(HeaderName),
    /// Regular expression tested against the header name
    Pattern(Regex),
}

impl HeaderRule {
    /// Build a case-insensitive pattern rule
    ///
    /// Only used with literal patterns defined in this crate, so an invalid
    /// expression is a programming error.
    pub fn pattern(expr: &str) -> Self {
        let regex = RegexBuilder::new(expr)
            .case_insensitive(true)
            .build()
            .expect("header rule pattern must be a valid regex");
        HeaderRule::Pattern(regex)
    }

    /// Check whether this rule selects the given header name
    pub fn matches(&self, name: &HeaderName) -> bool {
        match self {
            // HeaderName is always stored lower-cased
            HeaderRule::Exact(exact) => exact == name,
            HeaderRule::Pattern(regex) => regex.is_match(name.as_str()),
        }
    }
}

/// Headers forwarded from the client to the upstream
pub static REQUEST_HEADER_RULES: Lazy<Vec<HeaderRule>> = Lazy::new(|| {
    vec![
        HeaderRule::Exact(CONTENT_TYPE),
        HeaderRule::Exact(AUTHORIZATION),
        HeaderRule::pattern("OpenAI-Beta"),
    ]
});

/// Headers copied from the upstream response back to the client
pub static RESPONSE_HEADER_RULES: Lazy<Vec<HeaderRule>> = Lazy::new(|| {
    vec![
        HeaderRule::Exact(CONTENT_TYPE),
        HeaderRule::pattern("^x-ratelimit-"),
        HeaderRule::pattern("^openai-"),
    ]
});

/// Pick the headers whose name matches any rule
///
/// Returns a new map; `source` is left untouched. Every value of a
/// matching name is kept, except values that are not valid visible ASCII,
/// which are skipped.
pub fn pick_headers(source: &HeaderMap, rules: &[HeaderRule]) -> HeaderMap {
    let mut picked = HeaderMap::new();

    for name in source.keys() {
        if !rules.iter().any(|rule| rule.matches(name)) {
            continue;
        }

        for value in source.get_all(name) {
            if value.to_str().is_ok() {
                picked.append(name.clone(), value.clone());
            }
        }
    }

    picked
}

/// Render headers for diagnostic logging with credentials masked
pub fn redacted(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let shown = if name == AUTHORIZATION {
                "[redacted]".to_string()
            } else {
                value.to_str().unwrap_or("[non-text]").to_string()
            };
            (name.as_str().to_string(), shown)
        })
        .collect()
}
