//! HTTPS switch decision.
//!
//! # Responsibilities
//! - Decide whether a request must move to the secure website URL
//! - Build the target URL so the client lands on the same page
//! - Emit the redirect instruction and tell the caller whether to halt
//!
//! # Design Decisions
//! - Localhost detection is a coarse substring match on the Host header
//!   (`127.0` or `localhost`, any case); `notlocalhost.example` matches too
//! - Any one of SSL active, localhost, or command line suppresses the switch
//! - `target_url` is a pure read; the stored website URL never changes

use serde::{Deserialize, Serialize};

use crate::switch::context::{InvocationMode, RequestContext};
use crate::switch::sink::RedirectSink;

/// Options for a switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SwitchOptions {
    /// Halt the current request flow right after emitting the redirect.
    pub exit: bool,
}

impl Default for SwitchOptions {
    fn default() -> Self {
        Self { exit: true }
    }
}

/// What the caller should do after [`SslSwitcher::switch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Flow {
    /// Keep handling the request.
    Continue,
    /// A redirect was emitted and nothing else may run for this request.
    Halt,
}

/// Enforces HTTPS for a website by redirecting plain requests to the
/// secure version of the same page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SslSwitcher {
    website_url: String,
    options: SwitchOptions,
}

impl SslSwitcher {
    /// Create a switcher targeting `website_url`, stored verbatim.
    pub fn new(website_url: impl Into<String>) -> Self {
        Self::with_options(website_url, SwitchOptions::default())
    }

    pub fn with_options(website_url: impl Into<String>, options: SwitchOptions) -> Self {
        Self {
            website_url: website_url.into(),
            options,
        }
    }

    /// Create a switcher with default options and apply it in one step.
    pub fn auto_switch<S>(website_url: impl Into<String>, ctx: &RequestContext, sink: &mut S) -> Flow
    where
        S: RedirectSink + ?Sized,
    {
        Self::new(website_url).switch(ctx, sink)
    }

    pub fn website_url(&self) -> &str {
        &self.website_url
    }

    pub fn options(&self) -> &SwitchOptions {
        &self.options
    }

    pub fn exit_enabled(&self) -> bool {
        self.options.exit
    }

    pub fn set_exit_enabled(&mut self, enabled: bool) -> &mut Self {
        self.options.exit = enabled;
        self
    }

    /// Whether the request targets a local host.
    pub fn is_localhost(&self, ctx: &RequestContext) -> bool {
        let host = ctx.host.to_lowercase();
        host.contains("127.0") || host.contains("localhost")
    }

    /// Whether the process runs from the command line rather than serving
    /// a request. Either signal is sufficient.
    pub fn is_cli(&self, ctx: &RequestContext) -> bool {
        ctx.invocation == InvocationMode::CommandLine || ctx.stdin_defined
    }

    /// Whether the connection is already secure.
    pub fn is_ssl_active(&self, ctx: &RequestContext) -> bool {
        ctx.https
            .as_deref()
            .map(|v| v.eq_ignore_ascii_case("on"))
            .unwrap_or(false)
    }

    /// URL to switch to, with the requested path appended so the client
    /// lands on the same page.
    pub fn target_url(&self, ctx: &RequestContext) -> String {
        let Some(uri) = ctx.request_uri.as_deref() else {
            return self.website_url.clone();
        };

        let trimmed = uri.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return self.website_url.clone();
        }

        format!(
            "{}/{}",
            self.website_url.trim_end_matches('/'),
            uri.trim_start_matches('/')
        )
    }

    pub fn is_switch_required(&self, ctx: &RequestContext) -> bool {
        !self.is_ssl_active(ctx) && !self.is_localhost(ctx) && !self.is_cli(ctx)
    }

    /// Emit a redirect to the secure URL when required.
    ///
    /// Returns [`Flow::Halt`] only when a redirect was emitted and the `exit`
    /// option is enabled. With `exit` disabled the switcher never stops the
    /// request itself; orchestration stays with the caller.
    pub fn switch<S>(&self, ctx: &RequestContext, sink: &mut S) -> Flow
    where
        S: RedirectSink + ?Sized,
    {
        if !self.is_switch_required(ctx) {
            tracing::debug!(host = %ctx.host, "HTTPS switch not required");
            return Flow::Continue;
        }

        let location = self.target_url(ctx);
        sink.redirect(&location);

        let halted = self.options.exit;
        tracing::info!(host = %ctx.host, location = %location, halted, "Switching to HTTPS");

        if halted {
            Flow::Halt
        } else {
            Flow::Continue
        }
    }
}
