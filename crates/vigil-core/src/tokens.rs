//! Bearer token types.

use std::fmt;

/// An access token sent as `Authorization: Bearer <token>`.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the full `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Hide token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// A refresh token exchanged at `/auth/refresh` for a new access token.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshToken(String);

impl RefreshToken {
    /// Create a new refresh token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in refresh requests.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefreshToken").field(&"[REDACTED]").finish()
    }
}

/// An access/refresh token pair as held by a token store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: Option<AccessToken>,
    pub refresh_token: Option<RefreshToken>,
}

impl TokenPair {
    /// A pair with neither token set.
    pub fn empty() -> Self {
        Self {
            access_token: None,
            refresh_token: None,
        }
    }

    /// Apply a `set_tokens` write: access always, refresh only if given.
    pub fn set(&mut self, access: AccessToken, refresh: Option<RefreshToken>) {
        self.access_token = Some(access);
        if let Some(refresh) = refresh {
            self.refresh_token = Some(refresh);
        }
    }

    /// Remove both tokens.
    pub fn clear(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
    }
}

impl Default for TokenPair {
    fn default() -> Self {
        Self::empty()
    }
}
