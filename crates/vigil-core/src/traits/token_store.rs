//! Session token store trait.

use crate::{AccessToken, RefreshToken, Result};

/// Durable holder of the current access/refresh token pair.
///
/// Implementations are shared between clients behind an `Arc` and must be
/// internally synchronized. Concurrent writers race; the last write wins.
pub trait TokenStore: Send + Sync {
    /// Store the access token, and the refresh token only if one is given.
    ///
    /// A `None` refresh token leaves any previously stored one untouched.
    fn set_tokens(&self, access: AccessToken, refresh: Option<RefreshToken>) -> Result<()>;

    /// Returns the stored access token, if any.
    fn access_token(&self) -> Option<AccessToken>;

    /// Returns the stored refresh token, if any.
    fn refresh_token(&self) -> Option<RefreshToken>;

    /// Remove both tokens. Idempotent.
    fn clear_tokens(&self) -> Result<()>;

    /// True iff an access token is present.
    ///
    /// This is a presence check; expiry is only discovered through a 401.
    fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }
}
