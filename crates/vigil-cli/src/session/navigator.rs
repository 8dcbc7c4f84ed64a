//! Terminal counterpart of the redirect to the login entry point.

use colored::Colorize;
use tracing::debug;

use vigil_core::Navigator;

/// Tells the operator to log in again once the session has been torn down.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliNavigator;

impl Navigator for CliNavigator {
    fn navigate(&self, path: &str) {
        debug!(path, "Redirecting to login");
        eprintln!(
            "{} {}",
            "✗".red(),
            "Session expired. Run 'vigil auth login' to sign in again.".yellow()
        );
    }
}
