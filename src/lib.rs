//! HTTPS switcher library.
//!
//! Detects requests that arrive over plain transport and redirects them to
//! the secure version of the same page.

pub mod config;
pub mod http;
pub mod observability;
pub mod switch;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use switch::{Flow, InvocationMode, RedirectSink, RequestContext, SslSwitcher, SwitchOptions};
