use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::errors::ClientError;

/// Point-in-time copy of a container's state, cheap for a view to take on
/// every render.
#[derive(Debug, Clone)]
pub struct ResourceSnapshot<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

struct State<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
}

/// The one reusable fetch/loading/error triplet every data-fetch container
/// is built on.
///
/// Loads are fenced by a generation counter: [`Resource::begin_load`] bumps
/// the generation and [`Resource::complete`] applies a result only while
/// its generation is still current. A completion whose load was superseded
/// (or whose owning view is gone and has started nothing newer than a
/// fresher load) is dropped instead of overwriting newer state.
pub struct Resource<T> {
    state: Arc<RwLock<State<T>>>,
    generation: Arc<AtomicU64>,
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            generation: Arc::clone(&self.generation),
        }
    }
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Resource<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                data: None,
                loading: false,
                error: None,
            })),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.state.read().map(|s| s.loading).unwrap_or(false)
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.read().ok().and_then(|s| s.error.clone())
    }

    /// Begin a fenced load: set loading, clear the previous error, bump
    /// the generation. The returned token must be handed back to
    /// [`Resource::complete`].
    pub(crate) fn begin_load(&self) -> u64 {
        if let Ok(mut state) = self.state.write() {
            state.loading = true;
            state.error = None;
        }
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Apply a fenced load result. Returns `false` (state untouched) when
    /// a newer load has started since `token` was issued.
    pub(crate) fn complete(&self, token: u64, result: Result<T, ClientError>) -> bool {
        if self.generation.load(Ordering::SeqCst) != token {
            return false;
        }
        if let Ok(mut state) = self.state.write() {
            match result {
                Ok(data) => state.data = Some(data),
                Err(e) => state.error = Some(e.to_string()),
            }
            state.loading = false;
        }
        true
    }

    /// Set loading without fencing, for operations where the latest
    /// completion deliberately wins (analysis runs).
    pub(crate) fn start_unfenced(&self) {
        if let Ok(mut state) = self.state.write() {
            state.loading = true;
            state.error = None;
        }
    }

    pub(crate) fn set_data(&self, data: Option<T>) {
        if let Ok(mut state) = self.state.write() {
            state.data = data;
            state.loading = false;
        }
    }

    pub(crate) fn set_error(&self, error: String) {
        if let Ok(mut state) = self.state.write() {
            state.error = Some(error);
            state.loading = false;
        }
    }

    pub(crate) fn clear_error(&self) {
        if let Ok(mut state) = self.state.write() {
            state.error = None;
        }
    }
}

impl<T: Clone> Resource<T> {
    #[must_use]
    pub fn data(&self) -> Option<T> {
        self.state.read().ok().and_then(|s| s.data.clone())
    }

    #[must_use]
    pub fn snapshot(&self) -> ResourceSnapshot<T> {
        match self.state.read() {
            Ok(state) => ResourceSnapshot {
                data: state.data.clone(),
                loading: state.loading,
                error: state.error.clone(),
            },
            Err(_) => ResourceSnapshot {
                data: None,
                loading: false,
                error: None,
            },
        }
    }
}
