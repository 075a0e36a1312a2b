//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! switch decisions, HTTP server:
//!     → logging.rs (structured log events, stderr)
//!     → metrics.rs (decision counters)
//!
//! Consumers:
//!     → Log aggregation (stderr keeps CGI stdout clean)
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
