//! Redirect instruction sinks.

/// Receives the redirect instruction emitted by [`SslSwitcher::switch`].
///
/// [`SslSwitcher::switch`]: crate::switch::SslSwitcher::switch
pub trait RedirectSink {
    /// Direct the client to `location`.
    fn redirect(&mut self, location: &str);
}

/// Keeps the most recent location.
impl RedirectSink for Option<String> {
    fn redirect(&mut self, location: &str) {
        *self = Some(location.to_string());
    }
}

/// Records every instruction in emission order.
impl RedirectSink for Vec<String> {
    fn redirect(&mut self, location: &str) {
        self.push(location.to_string());
    }
}

impl<S: RedirectSink + ?Sized> RedirectSink for &mut S {
    fn redirect(&mut self, location: &str) {
        (**self).redirect(location);
    }
}
