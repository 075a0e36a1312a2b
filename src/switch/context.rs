//! Request context snapshot.
//!
//! # Responsibilities
//! - Hold the values a switch decision reads (host, request URI, HTTPS flag)
//! - Record how the process was invoked (network served or command line)
//! - Build a snapshot from CGI/1.1 meta-variables
//!
//! The HTTP adapter lives in `crate::http::request`.

use std::io::IsTerminal;

/// How the current execution was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvocationMode {
    /// Serving a network request.
    #[default]
    Served,
    /// Run directly from a shell or scheduler.
    CommandLine,
}

/// Everything a switch decision needs to know about the current request.
///
/// Absent values are legal: a missing request URI yields the bare website URL
/// and a missing HTTPS flag counts as plain transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Value of the `Host` header.
    pub host: String,

    /// Requested path including any query string.
    pub request_uri: Option<String>,

    /// Secure transport flag; `"on"` (any case) means active.
    pub https: Option<String>,

    /// Invocation mode of the running process.
    pub invocation: InvocationMode,

    /// Standard input is attached to an interactive terminal.
    pub stdin_defined: bool,
}

impl RequestContext {
    /// Context for a network-served request to `host`.
    pub fn served(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Context for a command-line run with no request attached.
    pub fn command_line() -> Self {
        Self {
            invocation: InvocationMode::CommandLine,
            ..Self::default()
        }
    }

    pub fn with_request_uri(mut self, uri: impl Into<String>) -> Self {
        self.request_uri = Some(uri.into());
        self
    }

    pub fn with_https(mut self, value: impl Into<String>) -> Self {
        self.https = Some(value.into());
        self
    }

    pub fn with_stdin_defined(mut self, defined: bool) -> Self {
        self.stdin_defined = defined;
        self
    }

    /// Build a context from CGI/1.1 meta-variables.
    ///
    /// `lookup` resolves a variable name to its value. A missing
    /// `GATEWAY_INTERFACE` means nobody is serving a request through us.
    pub fn from_cgi_env<F>(lookup: F, stdin_is_terminal: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let invocation = if lookup("GATEWAY_INTERFACE").is_some() {
            InvocationMode::Served
        } else {
            InvocationMode::CommandLine
        };

        Self {
            host: lookup("HTTP_HOST").unwrap_or_default(),
            request_uri: lookup("REQUEST_URI"),
            https: lookup("HTTPS"),
            invocation,
            stdin_defined: stdin_is_terminal,
        }
    }

    /// Build a context from the environment of the running process.
    pub fn from_process_env() -> Self {
        Self::from_cgi_env(
            |name| std::env::var(name).ok(),
            std::io::stdin().is_terminal(),
        )
    }
}
