//! Snapshot persistence (load/save per user).
//!
//! Adapters implement a get/set contract against a per-user scoped store.
//! The engine treats `save` as best-effort: failures are logged at the store
//! boundary and never roll back in-memory state.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use directories::ProjectDirs;
use thiserror::Error;

use crate::state::ProgressionState;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("persistence unavailable")]
    Unavailable,
}

/// Get/set contract against a per-user scoped store. Methods take `&self`;
/// implementations use interior mutability.
pub trait PersistenceAdapter: Send + Sync {
    /// Load the user's snapshot, or `None` if one was never saved.
    fn load(&self, user_id: &str) -> Result<Option<ProgressionState>, PersistError>;

    /// Write the user's snapshot. Last writer wins.
    fn save(&self, user_id: &str, state: &ProgressionState) -> Result<(), PersistError>;
}

/// Stores one pretty-printed JSON snapshot per user under a directory,
/// `<dir>/<user_id>.json`.
pub struct FileAdapter {
    dir: PathBuf,
}

impl FileAdapter {
    /// Adapter rooted at the platform config directory,
    /// e.g. `~/.config/ascend/` on Linux.
    pub fn new() -> Result<Self, PersistError> {
        let project_dirs = ProjectDirs::from("", "", "ascend").ok_or_else(|| {
            PersistError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not determine config directory",
            ))
        })?;
        Ok(Self {
            dir: project_dirs.config_dir().to_path_buf(),
        })
    }

    /// Adapter rooted at an explicit directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("{user_id}.json"))
    }
}

impl PersistenceAdapter for FileAdapter {
    fn load(&self, user_id: &str) -> Result<Option<ProgressionState>, PersistError> {
        let path = self.path_for(user_id);
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn save(&self, user_id: &str, state: &ProgressionState) -> Result<(), PersistError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(state)?;
        fs::write(self.path_for(user_id), json)?;
        Ok(())
    }
}

/// In-memory adapter round-tripping through JSON. Backs tests and ephemeral
/// guest sessions; counts successful saves and can simulate an outage.
#[derive(Default)]
pub struct MemoryAdapter {
    entries: Mutex<HashMap<String, String>>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saves that succeeded.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make every subsequent `save` fail until cleared.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Raw stored JSON for a user, if any.
    pub fn raw(&self, user_id: &str) -> Option<String> {
        self.entries.lock().unwrap().get(user_id).cloned()
    }
}

impl PersistenceAdapter for MemoryAdapter {
    fn load(&self, user_id: &str) -> Result<Option<ProgressionState>, PersistError> {
        match self.entries.lock().unwrap().get(user_id) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, user_id: &str, state: &ProgressionState) -> Result<(), PersistError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(PersistError::Unavailable);
        }
        let json = serde_json::to_string_pretty(state)?;
        self.entries
            .lock()
            .unwrap()
            .insert(user_id.to_string(), json);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
