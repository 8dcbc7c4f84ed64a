//! A small durable key/value file.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, instrument, trace, warn};

use vigil_core::Result;
use vigil_core::error::{Error, StorageError};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

type Entries = BTreeMap<String, String>;

fn map_io(path: &Path) -> impl Fn(std::io::Error) -> Error + '_ {
    move |err| {
        Error::Storage(StorageError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}

/// String key/value pairs persisted as one JSON object.
///
/// Every operation re-reads the file so that separate processes sharing it
/// observe each other's writes. Readers take a shared lock and writers an
/// exclusive lock on a sibling `.lock` file; writes go through a temporary
/// file and a rename.
#[derive(Debug, Clone)]
pub struct FileKeyValue {
    path: PathBuf,
}

impl FileKeyValue {
    /// Open (lazily) the key/value file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn open_lock(&self) -> Result<File> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(map_io(parent))?;
        }
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(map_io(&lock_path))
    }

    fn read_unlocked(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }
        let content = fs::read_to_string(&self.path).map_err(map_io(&self.path))?;
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            Error::Storage(StorageError::Corrupt {
                message: format!("{}: {}", self.path.display(), e),
            })
        })
    }

    fn write_unlocked(&self, entries: &Entries) -> Result<()> {
        let json = serde_json::to_string_pretty(entries).map_err(|e| {
            Error::Storage(StorageError::Corrupt {
                message: e.to_string(),
            })
        })?;

        let tmp = self.tmp_path();
        let mut file = File::create(&tmp).map_err(map_io(&tmp))?;

        // Set restrictive permissions before any secret is written (Unix only)
        #[cfg(unix)]
        {
            let mut perms = file.metadata().map_err(map_io(&tmp))?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&tmp, perms).map_err(map_io(&tmp))?;
        }

        file.write_all(json.as_bytes()).map_err(map_io(&tmp))?;
        file.sync_data().map_err(map_io(&tmp))?;
        fs::rename(&tmp, &self.path).map_err(map_io(&self.path))?;
        Ok(())
    }

    /// Read every entry.
    pub fn entries(&self) -> Result<Entries> {
        let lock = self.open_lock()?;
        FileExt::lock_shared(&lock).map_err(map_io(&self.lock_path()))?;
        let result = self.read_unlocked();
        let _ = FileExt::unlock(&lock);
        result
    }

    /// Read one entry.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.remove(key))
    }

    /// Apply `f` to the entries and persist the result atomically.
    ///
    /// A file that no longer parses is replaced, so a damaged session can
    /// still be cleared or overwritten by a new login.
    #[instrument(skip(self, f), fields(path = %self.path.display()))]
    pub fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Entries),
    {
        let lock = self.open_lock()?;
        FileExt::lock_exclusive(&lock).map_err(map_io(&self.lock_path()))?;

        let current = match self.read_unlocked() {
            Err(Error::Storage(StorageError::Corrupt { message })) => {
                warn!(%message, "Overwriting unreadable key/value file");
                Ok(Entries::new())
            }
            other => other,
        };
        let result = current.and_then(|mut entries| {
            f(&mut entries);
            trace!(keys = entries.len(), "Writing key/value file");
            self.write_unlocked(&entries)
        });

        let _ = FileExt::unlock(&lock);
        result
    }

    /// Set one entry.
    pub fn set(&self, key: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        self.update(|entries| {
            entries.insert(key.to_string(), value);
        })
    }

    /// Remove entries. Missing keys are ignored.
    pub fn remove(&self, keys: &[&str]) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|entries| {
            for key in keys {
                entries.remove(*key);
            }
        })?;
        debug!(?keys, "Removed keys");
        Ok(())
    }
}
