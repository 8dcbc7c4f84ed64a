//! In-memory token store.

use std::sync::{PoisonError, RwLock};

use crate::traits::TokenStore;
use crate::{AccessToken, RefreshToken, Result, TokenPair};

/// A token store that lives as long as the process.
///
/// Useful for embedders that manage persistence themselves, and for keeping
/// independent sessions apart in tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<TokenPair>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with tokens.
    pub fn with_tokens(access: AccessToken, refresh: Option<RefreshToken>) -> Self {
        let mut pair = TokenPair::empty();
        pair.set(access, refresh);
        Self {
            tokens: RwLock::new(pair),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn set_tokens(&self, access: AccessToken, refresh: Option<RefreshToken>) -> Result<()> {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(access, refresh);
        Ok(())
    }

    fn access_token(&self) -> Option<AccessToken> {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .access_token
            .clone()
    }

    fn refresh_token(&self) -> Option<RefreshToken> {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .refresh_token
            .clone()
    }

    fn clear_tokens(&self) -> Result<()> {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        Ok(())
    }
}

impl std::fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryTokenStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
