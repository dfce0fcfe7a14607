use thiserror::Error;

/// Unified error type for the entire roboadvisor-client-core library.
/// Every public fallible function returns `Result<T, ClientError>`.
///
/// `Display` of every variant is exactly the user-facing message in the
/// session's configured language. Technical detail (status lines, reqwest
/// errors, malformed bodies) is written to the `tracing` diagnostic channel
/// at the point of failure and never stored in the variant.
#[derive(Debug, Error)]
pub enum ClientError {
    // ── Backend responses ───────────────────────────────────────────
    /// The backend answered with an error status. `message` is already
    /// classified: either the server's own user-friendly detail or the
    /// status-keyed generic text from `messages::classify`.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body was not valid JSON. Carries the HTTP status the
    /// response arrived with.
    #[error("{message}")]
    BadResponse { status: u16, message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// The request itself failed (offline, DNS, TLS, timeout).
    #[error("{0}")]
    Network(String),

    // ── Client-side ─────────────────────────────────────────────────
    /// A pre-request form check failed; no network call was made.
    #[error("{0}")]
    Validation(String),

    /// A successfully parsed JSON body did not match the expected model.
    #[error("{0}")]
    Deserialization(String),

    // ── File I/O (token store, downloads) ───────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Construction ────────────────────────────────────────────────
    /// The client could not be configured (malformed base URL).
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status code for response-shaped failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } | ClientError::BadResponse { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// True when no request reached the network (client-side short-circuit).
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> Self {
        ClientError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Deserialization(e.to_string())
    }
}
