//! Transient user feedback, decoupled from data fetching.
//!
//! The store is a plain ordered queue; it owns no timers. Auto-expiry is
//! the presentational layer's job, modeled here as [`ToastTimers`]: one
//! cancelable task per toast, released on removal and aborted wholesale
//! when the owner goes away. A timer never outlives its owning view.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Toast ids are a process-wide counter: strictly increasing, never
/// reused, not reset for the lifetime of the process.
static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(0);

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
}

/// In-memory ordered queue of transient messages.
#[derive(Default)]
pub struct ToastStore {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its id.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind, duration: Duration) -> u64 {
        let id = NEXT_TOAST_ID.fetch_add(1, Ordering::SeqCst) + 1;
        let toast = Toast {
            id,
            message: message.into(),
            kind,
            duration,
        };
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
        id
    }

    /// Remove by id; removing an absent id is a no-op.
    pub fn remove(&self, id: u64) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.retain(|t| t.id != id);
        }
    }

    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().map(|t| t.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.lock().map(|t| t.is_empty()).unwrap_or(true)
    }

    // ── Convenience wrappers ────────────────────────────────────────

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Success, DEFAULT_TOAST_DURATION)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Error, DEFAULT_TOAST_DURATION)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Info, DEFAULT_TOAST_DURATION)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Warning, DEFAULT_TOAST_DURATION)
    }
}

/// Scoped auto-expiry timers for a view's toasts.
///
/// Each scheduled expiry is one task; `cancel` (or the expiry itself)
/// releases it, and dropping the `ToastTimers` aborts everything still
/// outstanding.
#[derive(Default)]
pub struct ToastTimers {
    handles: Arc<Mutex<HashMap<u64, tokio::task::AbortHandle>>>,
}

impl ToastTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule removal of `id` from `store` after the toast's duration.
    /// Re-scheduling the same id replaces (and aborts) the earlier timer.
    pub fn schedule(&self, store: &Arc<ToastStore>, id: u64, duration: Duration) {
        let store = Arc::clone(store);
        let handles = Arc::clone(&self.handles);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            store.remove(id);
            if let Ok(mut handles) = handles.lock() {
                handles.remove(&id);
            }
        });
        if let Ok(mut handles) = self.handles.lock() {
            if let Some(previous) = handles.insert(id, handle.abort_handle()) {
                previous.abort();
            }
        }
    }

    /// Cancel the expiry for `id` (early dismissal); absent ids are a
    /// no-op.
    pub fn cancel(&self, id: u64) {
        if let Ok(mut handles) = self.handles.lock() {
            if let Some(handle) = handles.remove(&id) {
                handle.abort();
            }
        }
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.handles.lock().map(|h| h.len()).unwrap_or(0)
    }
}

impl Drop for ToastTimers {
    fn drop(&mut self) {
        if let Ok(handles) = self.handles.lock() {
            for handle in handles.values() {
                handle.abort();
            }
        }
    }
}
