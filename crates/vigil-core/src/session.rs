//! Session context shared by the HTTP clients.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::AuthError;
use crate::memory::MemoryTokenStore;
use crate::traits::{Navigator, NoopNavigator, TokenStore};
use crate::{AccessToken, RefreshToken, Result};

/// Path of the login entry point.
pub const LOGIN_PATH: &str = "/login";

/// The credentials cache and redirect hook for one client context.
///
/// Sessions are cheap to clone (they use internal `Arc`). Clones share the
/// same store; sessions built from different stores never see each other's
/// tokens.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    login_path: String,
}

impl Session {
    /// Create a session over a token store and a navigator.
    pub fn new(store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self::with_login_path(store, navigator, LOGIN_PATH)
    }

    /// Create a session that redirects to a custom login path.
    pub fn with_login_path(
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                store,
                navigator,
                login_path: login_path.into(),
            }),
        }
    }

    /// An empty in-memory session with no redirect hook.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()), Arc::new(NoopNavigator))
    }

    /// Returns the login entry path.
    pub fn login_path(&self) -> &str {
        &self.inner.login_path
    }

    /// Store tokens; see [`TokenStore::set_tokens`].
    pub fn set_tokens(&self, access: AccessToken, refresh: Option<RefreshToken>) -> Result<()> {
        self.inner.store.set_tokens(access, refresh)
    }

    pub fn access_token(&self) -> Option<AccessToken> {
        self.inner.store.access_token()
    }

    pub fn refresh_token(&self) -> Option<RefreshToken> {
        self.inner.store.refresh_token()
    }

    pub fn clear_tokens(&self) -> Result<()> {
        self.inner.store.clear_tokens()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.store.is_authenticated()
    }

    /// Fail with [`AuthError::NotAuthenticated`] when no access token is stored.
    pub fn ensure_authenticated(&self) -> Result<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(AuthError::NotAuthenticated.into())
        }
    }

    /// Clear both tokens and send the client to the login entry point.
    ///
    /// Never fails: a storage error is logged and the redirect still happens,
    /// so the caller can go on to return the error that caused the teardown.
    pub fn teardown(&self) {
        info!(login_path = %self.inner.login_path, "Tearing down session");
        if let Err(e) = self.inner.store.clear_tokens() {
            warn!(error = %e, "Failed to clear stored tokens");
        }
        self.inner.navigator.navigate(&self.inner.login_path);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("login_path", &self.inner.login_path)
            .field("authenticated", &self.is_authenticated())
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}
