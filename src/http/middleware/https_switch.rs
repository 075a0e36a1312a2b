//! HTTPS switch middleware.
//! Redirects plain requests to the secure website URL.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::SwitcherConfig;
use crate::observability::metrics::{self, Decision};
use crate::switch::{Flow, RequestContext, SslSwitcher};

/// State required for the switch middleware.
#[derive(Debug, Clone)]
pub struct SwitchState {
    pub switcher: Arc<SslSwitcher>,
    pub redirect_status: StatusCode,
    pub trust_forwarded_proto: bool,
}

impl SwitchState {
    pub fn new(switcher: SslSwitcher) -> Self {
        Self {
            switcher: Arc::new(switcher),
            redirect_status: StatusCode::FOUND,
            trust_forwarded_proto: false,
        }
    }

    pub fn from_config(config: &SwitcherConfig) -> Self {
        let redirect_status = StatusCode::from_u16(config.redirect_status)
            .ok()
            .filter(StatusCode::is_redirection)
            .unwrap_or(StatusCode::FOUND);

        Self {
            switcher: Arc::new(SslSwitcher::with_options(
                config.website_url.clone(),
                config.options(),
            )),
            redirect_status,
            trust_forwarded_proto: config.trust_forwarded_proto,
        }
    }
}

pub async fn https_switch_middleware(
    State(state): State<SwitchState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let (parts, body) = req.into_parts();
    let ctx = RequestContext::from_request_parts(&parts, state.trust_forwarded_proto);
    let req = Request::from_parts(parts, body);

    let mut location: Option<String> = None;
    let flow = state.switcher.switch(&ctx, &mut location);

    match classify(flow, location.as_deref()) {
        (Decision::Halt, Some(value)) => {
            metrics::record_decision(Decision::Halt);
            (state.redirect_status, [(header::LOCATION, value)]).into_response()
        }
        (Decision::Redirect, Some(value)) => {
            // The handler still runs; its response carries the redirect.
            metrics::record_decision(Decision::Redirect);
            let mut response = next.run(req).await;
            let status = response.status();
            if !status.is_redirection() && status != StatusCode::CREATED {
                *response.status_mut() = state.redirect_status;
            }
            response.headers_mut().insert(header::LOCATION, value);
            response
        }
        _ => {
            metrics::record_decision(Decision::Passthrough);
            next.run(req).await
        }
    }
}

/// Map a switch result to the decision the middleware acts on.
///
/// A target that is not a valid header value is passed through.
fn classify(flow: Flow, location: Option<&str>) -> (Decision, Option<HeaderValue>) {
    let Some(location) = location else {
        return (Decision::Passthrough, None);
    };

    match HeaderValue::from_str(location) {
        Ok(value) => match flow {
            Flow::Halt => (Decision::Halt, Some(value)),
            Flow::Continue => (Decision::Redirect, Some(value)),
        },
        Err(e) => {
            tracing::error!(location = %location, error = %e, "Redirect target is not a valid header value, passing through");
            (Decision::Passthrough, None)
        }
    }
}
