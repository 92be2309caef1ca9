//! Device-local key/value persistence for the cart store.
//!
//! Two independently keyed records - cart contents and theme preference -
//! are read once at startup and rewritten on every mutation. Storage is
//! assumed reliable but not guaranteed durable: a failed read yields
//! nothing (the cart starts empty), a failed write is logged and the
//! in-memory state stays authoritative for the session. No retries.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

/// Fixed storage keys, namespaced as the shop has always namespaced them.
pub mod keys {
    /// Serialized cart contents.
    pub const CART: &str = "mate-cart";
    /// Serialized theme preference.
    pub const THEME: &str = "mate-theme";
}

/// A keyed local store the cart state survives restarts in.
///
/// `write` is deliberately infallible at the signature: implementations
/// log failures and carry on, because losing a write only costs
/// durability, never correctness of the running session.
pub trait StateStore: Send + Sync {
    /// Read the value under `key`, if a prior save exists and is
    /// readable.
    fn read(&self, key: &str) -> Option<String>;

    /// Overwrite the value under `key` (last write wins).
    fn write(&self, key: &str, value: &str);
}

impl<S: StateStore + ?Sized> StateStore for std::sync::Arc<S> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) {
        (**self).write(key, value);
    }
}

/// File-backed store: one JSON file per key under a data directory.
///
/// This is the storefront's stand-in for a browser's per-device local
/// storage.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store keys as files under `dir`. The directory is created lazily
    /// on first write.
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            warn!(error = %e, dir = %self.dir.display(), "cannot create data directory");
            return;
        }
        let path = self.path_for(key);
        if let Err(e) = std::fs::write(&path, value) {
            warn!(error = %e, path = %path.display(), "state write failed, keeping in-memory value");
        }
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}
