//! Durable token store over a key/value file.

use std::path::Path;

use chrono::Utc;
use tracing::{debug, instrument, warn};

use vigil_core::{AccessToken, RefreshToken, Result, TokenStore};

use crate::kv::FileKeyValue;

/// Key holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Key holding the RFC 3339 time of the last token write.
pub const SAVED_AT_KEY: &str = "saved_at";

/// A [`TokenStore`] persisted in a JSON key/value file.
///
/// Other keys in the same file are left alone, so the file can also hold
/// client settings.
///
/// Reads that fail (unreadable or corrupt file) are logged and treated as
/// "no token"; the next 401 then tears the session down.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    kv: FileKeyValue,
}

impl FileTokenStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            kv: FileKeyValue::new(path),
        }
    }

    /// Create a store over an existing key/value file.
    pub fn from_kv(kv: FileKeyValue) -> Self {
        Self { kv }
    }

    /// The underlying key/value file.
    pub fn kv(&self) -> &FileKeyValue {
        &self.kv
    }

    /// When the tokens were last written, if known.
    pub fn saved_at(&self) -> Option<String> {
        self.read(SAVED_AT_KEY)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.kv.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, key, "Failed to read token store");
                None
            }
        }
    }
}

impl TokenStore for FileTokenStore {
    #[instrument(skip_all, fields(path = %self.kv.path().display()))]
    fn set_tokens(&self, access: AccessToken, refresh: Option<RefreshToken>) -> Result<()> {
        let with_refresh = refresh.is_some();
        self.kv.update(|entries| {
            entries.insert(ACCESS_TOKEN_KEY.to_string(), access.as_str().to_string());
            if let Some(refresh) = refresh {
                entries.insert(REFRESH_TOKEN_KEY.to_string(), refresh.as_str().to_string());
            }
            entries.insert(SAVED_AT_KEY.to_string(), Utc::now().to_rfc3339());
        })?;
        debug!(with_refresh, "Stored tokens");
        Ok(())
    }

    fn access_token(&self) -> Option<AccessToken> {
        self.read(ACCESS_TOKEN_KEY).map(AccessToken::new)
    }

    fn refresh_token(&self) -> Option<RefreshToken> {
        self.read(REFRESH_TOKEN_KEY).map(RefreshToken::new)
    }

    #[instrument(skip_all, fields(path = %self.kv.path().display()))]
    fn clear_tokens(&self) -> Result<()> {
        self.kv
            .remove(&[ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SAVED_AT_KEY])
    }
}
