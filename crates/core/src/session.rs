//! Session token store.
//!
//! The bearer token is the single durable piece of client state: one opaque
//! string under a fixed file name in the per-user data directory, readable
//! by every client process of the same user. The in-memory copy is read once
//! at construction; concurrent writers (another process, another "tab") are
//! observed only through an explicit [`SessionStore::reload_from_disk`],
//! which the shell drives from its focus/storage events.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use crate::errors::ClientError;

/// Callback invoked with the new token value on every observed change.
pub type SessionObserver = Box<dyn Fn(Option<&str>) + Send + Sync>;

/// Owns the session token: in-memory copy plus persistent file mirror.
pub struct SessionStore {
    path: PathBuf,
    token: RwLock<Option<String>>,
    observers: Mutex<HashMap<u64, SessionObserver>>,
    next_observer_id: Mutex<u64>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("path", &self.path)
            .field("has_token", &self.token.read().map(|t| t.is_some()).unwrap_or(false))
            .finish()
    }
}

impl SessionStore {
    /// Open the store, picking up whatever token is currently persisted.
    /// A missing or unreadable file means "no session".
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let token = read_token_file(&path);
        Self {
            path,
            token: RwLock::new(token),
            observers: Mutex::new(HashMap::new()),
            next_observer_id: Mutex::new(0),
        }
    }

    /// Current in-memory token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Store a new token (or clear with `None`): memory first, then the
    /// file mirror, then observers.
    pub fn set_token(&self, token: Option<&str>) -> Result<(), ClientError> {
        if let Ok(mut slot) = self.token.write() {
            *slot = token.map(str::to_owned);
        }
        match token {
            Some(value) => write_token_file(&self.path, value)?,
            None => {
                if self.path.exists() {
                    std::fs::remove_file(&self.path)?;
                }
            }
        }
        self.notify(token);
        Ok(())
    }

    /// Re-read the persisted value (another process may have written it).
    /// Returns `true` and notifies observers when the value changed.
    pub fn reload_from_disk(&self) -> bool {
        let fresh = read_token_file(&self.path);
        let changed = {
            let Ok(mut slot) = self.token.write() else {
                return false;
            };
            if *slot == fresh {
                false
            } else {
                *slot = fresh.clone();
                true
            }
        };
        if changed {
            self.notify(fresh.as_deref());
        }
        changed
    }

    /// Register an observer for token changes. Returns an id for
    /// [`SessionStore::unsubscribe`].
    pub fn subscribe(&self, observer: SessionObserver) -> u64 {
        let id = {
            let mut next = self.next_observer_id.lock().expect("observer id lock");
            *next += 1;
            *next
        };
        self.observers
            .lock()
            .expect("observer lock")
            .insert(id, observer);
        id
    }

    /// Remove an observer; unknown ids are a no-op.
    pub fn unsubscribe(&self, id: u64) {
        self.observers.lock().expect("observer lock").remove(&id);
    }

    fn notify(&self, token: Option<&str>) {
        let observers = self.observers.lock().expect("observer lock");
        for observer in observers.values() {
            observer(token);
        }
    }
}

// ── File mirror ─────────────────────────────────────────────────────

fn read_token_file(path: &Path) -> Option<String> {
    let raw = std::fs::read_to_string(path).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Atomic write: temp file in the same directory, then rename, so a
/// concurrent reader never sees a half-written token.
fn write_token_file(path: &Path, token: &str) -> Result<(), ClientError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tmp_path)?;
    file.write_all(token.as_bytes())?;
    file.flush()?;
    drop(file);
    std::fs::rename(tmp_path, path)?;
    Ok(())
}
