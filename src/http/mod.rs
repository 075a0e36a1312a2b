//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing)
//!     → request.rs (RequestContext from request parts)
//!     → middleware/https_switch.rs (redirect or pass through)
//!     → fallback handler
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod server;

pub use middleware::{https_switch_middleware, SwitchState};
pub use request::X_FORWARDED_PROTO;
pub use server::HttpServer;
