//! Login redirection hook.

/// The active client context that is sent to the login entry point when the
/// session cannot be recovered.
pub trait Navigator: Send + Sync {
    /// Navigate to `path` (the login entry point).
    fn navigate(&self, path: &str);
}

/// A navigator that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _path: &str) {}
}
