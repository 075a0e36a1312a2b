//! Request context extraction.
//!
//! # Responsibilities
//! - Extract the switch-relevant values (host, path, scheme) from a request
//! - Honour `X-Forwarded-Proto` only when the deployment trusts its proxy
//!
//! # Design Decisions
//! - Host header wins over the URI authority (HTTP/1.1 clients send both)
//! - A request served by this listener is never a command-line invocation

use axum::http::{header, request::Parts, uri::Scheme};

use crate::switch::{InvocationMode, RequestContext};

pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

impl RequestContext {
    /// Build a context from HTTP request parts.
    pub fn from_request_parts(parts: &Parts, trust_forwarded_proto: bool) -> Self {
        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
            .or_else(|| parts.uri.authority().map(|a| a.to_string()))
            .unwrap_or_default();

        let request_uri = parts.uri.path_and_query().map(|pq| pq.as_str().to_string());

        let forwarded_https = trust_forwarded_proto
            && parts
                .headers
                .get(X_FORWARDED_PROTO)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.trim().eq_ignore_ascii_case("https"))
                .unwrap_or(false);

        let https = if parts.uri.scheme() == Some(&Scheme::HTTPS) || forwarded_https {
            Some("on".to_string())
        } else {
            None
        };

        Self {
            host,
            request_uri,
            https,
            invocation: InvocationMode::Served,
            stdin_defined: false,
        }
    }
}
