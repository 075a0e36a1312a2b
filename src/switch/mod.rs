//! Secure transport switching subsystem.
//!
//! # Data Flow
//! ```text
//! Hosting environment (HTTP request parts, CGI meta-variables)
//!     → context.rs (RequestContext snapshot)
//!     → switcher.rs (localhost / CLI / SSL checks, target URL)
//!     → sink.rs (redirect instruction emitted to the caller)
//!     → Flow::Continue | Flow::Halt returned to the caller
//! ```
//!
//! # Design Decisions
//! - Decisions are total: missing context values fall back, never fail
//! - The request context is passed explicitly on every call
//! - Termination is a returned signal; the caller decides what halting means

pub mod context;
pub mod sink;
pub mod switcher;

pub use context::{InvocationMode, RequestContext};
pub use sink::RedirectSink;
pub use switcher::{Flow, SslSwitcher, SwitchOptions};
