//! CLI session: file-backed tokens wired into a [`Backoffice`].

pub mod navigator;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use vigil_core::{ApiUrl, Session};
use vigil_file::FileTokenStore;
use vigil_http::{Backoffice, ClientConfig};

use navigator::CliNavigator;

/// Everything a command needs to talk to the API.
pub struct CliContext {
    pub backoffice: Backoffice,
    pub store: FileTokenStore,
    pub api: ApiUrl,
}

impl CliContext {
    /// Fail early with a hint when no token is stored.
    pub fn require_login(&self) -> Result<()> {
        self.backoffice
            .session()
            .ensure_authenticated()
            .context("No active session. Run 'vigil auth login' first.")
    }

    /// Remember the API URL so later commands target the same backend.
    pub fn remember_api(&self) -> Result<()> {
        self.store
            .kv()
            .set(storage::API_URL_KEY, self.api.as_str())
            .context("Failed to save API URL")
    }
}

/// Resolve the API URL: explicit flag or `VIGIL_API`, then the URL stored at
/// login, then the production default.
fn resolve_api(explicit: Option<&str>, store: &FileTokenStore) -> Result<ApiUrl> {
    if let Some(url) = explicit {
        return ApiUrl::new(url).context("Invalid API URL");
    }

    match store.kv().get(storage::API_URL_KEY) {
        Ok(Some(url)) => ApiUrl::new(&url).context("Invalid API URL in session file"),
        Ok(None) => Ok(ApiUrl::default()),
        Err(e) => {
            debug!(error = %e, "Could not read stored API URL");
            Ok(ApiUrl::default())
        }
    }
}

/// Build the client context for one invocation.
pub fn connect(api: Option<&str>) -> Result<CliContext> {
    let store = storage::open_store()?;
    let api = resolve_api(api, &store)?;
    debug!(%api, path = %store.kv().path().display(), "Opening session");

    let session = Session::new(Arc::new(store.clone()), Arc::new(CliNavigator));
    let backoffice = Backoffice::new(ClientConfig::new(api.clone()), session)
        .context("Failed to build HTTP client")?;

    Ok(CliContext {
        backoffice,
        store,
        api,
    })
}
