//! Location of the persisted session file.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use vigil_file::FileTokenStore;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "VIGIL_DATA_DIR";

/// Key under which the API base URL used at login is remembered.
pub const API_URL_KEY: &str = "api_url";

const SESSION_FILE: &str = "session.json";

/// Directory holding the session file.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let dirs = ProjectDirs::from("ci", "alphsecurite", "vigil")
        .context("Could not determine data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Path of the session file.
pub fn session_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(SESSION_FILE))
}

/// Open the durable token store. The file is created on first write.
pub fn open_store() -> Result<FileTokenStore> {
    Ok(FileTokenStore::new(session_path()?))
}
