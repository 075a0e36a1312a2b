//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the fallback handler
//! - Wire up middleware (request ID, tracing, HTTPS switch)
//! - Bind server to listener
//! - Stop on the shutdown future

use std::future::Future;

use axum::{http::StatusCode, middleware::from_fn_with_state, response::IntoResponse, Router};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::middleware::{https_switch_middleware, SwitchState};

/// Standalone HTTPS redirect server.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = SwitchState::from_config(&config.switcher);
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: SwitchState) -> Router {
        Router::new()
            .fallback(passthrough_handler)
            .layer(from_fn_with_state(state, https_switch_middleware))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            website_url = %self.config.switcher.website_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Answers requests that need no redirect.
async fn passthrough_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Wait for Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
