//! Metrics collection and exposition.
//!
//! # Metrics
//! - `https_switcher_decisions_total` (counter): decisions by outcome
//!   (`passthrough`, `redirect`, `halt`)

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Outcome of one switch decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// No redirect needed.
    Passthrough,
    /// Redirect emitted, request kept running.
    Redirect,
    /// Redirect emitted, request halted.
    Halt,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Passthrough => "passthrough",
            Decision::Redirect => "redirect",
            Decision::Halt => "halt",
        }
    }
}

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_decision(decision: Decision) {
    ::metrics::counter!("https_switcher_decisions_total", "outcome" => decision.as_str())
        .increment(1);
}
