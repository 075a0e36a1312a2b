//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::switch::SwitchOptions;

/// Root configuration for the switcher service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// HTTPS switch settings.
    pub switcher: SwitcherConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// HTTPS switch configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SwitcherConfig {
    /// Secure website URL that plain requests are sent to.
    pub website_url: String,

    /// Stop handling the request once the redirect is emitted.
    pub exit: bool,

    /// Status code of redirect responses.
    pub redirect_status: u16,

    /// Treat `X-Forwarded-Proto: https` as an active secure transport.
    /// Only enable behind a proxy that overwrites the header.
    pub trust_forwarded_proto: bool,
}

impl SwitcherConfig {
    pub fn options(&self) -> SwitchOptions {
        SwitchOptions { exit: self.exit }
    }
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            website_url: String::new(),
            exit: SwitchOptions::default().exit,
            redirect_status: 302,
            trust_forwarded_proto: false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
