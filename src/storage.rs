//! Durable key-value storage for the persisted session record.
//!
//! A session survives restarts as two independent string entries: the
//! bearer token verbatim under [`TOKEN_KEY`], and the JSON-serialized user
//! record under [`USER_KEY`]. Under correct operation both are absent or
//! both are present; the restore routine tolerates either being missing or
//! malformed, so the vault makes no consistency promises of its own.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};

/// Vault entry holding the bearer token verbatim.
pub const TOKEN_KEY: &str = "auth_token";

/// Vault entry holding the JSON-serialized user record.
pub const USER_KEY: &str = "auth_user";

/// Durable string storage for session entries.
pub trait SessionVault {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
    /// Removing a missing key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}

// Shared handles delegate, so a test can keep a vault and inspect it after
// handing a clone to the store.
impl<V: SessionVault + ?Sized> SessionVault for Arc<V> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// File-per-key vault under a local directory.
pub struct DiskVault {
    dir: PathBuf,
}

impl DiskVault {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SessionVault for DiskVault {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read vault entry {}", key))?;
        Ok(Some(contents))
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir).context("Failed to create vault directory")?;
        std::fs::write(self.entry_path(key), value)
            .with_context(|| format!("Failed to write vault entry {}", key))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove vault entry {}", key))?;
        }
        Ok(())
    }
}

/// In-memory vault for tests and embedding without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryVault {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow::anyhow!("Vault mutex poisoned"))
    }
}

impl SessionVault for MemoryVault {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
