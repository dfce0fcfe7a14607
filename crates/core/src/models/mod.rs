//! Typed mirrors of server state.
//!
//! Every entity here is a transient, client-held copy of what the backend
//! returned; nothing is durably owned by the client beyond the session
//! token. List-returning responses keep whatever order the server sent.

pub mod analysis;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod history;
pub mod portfolio;
pub mod user;
pub mod watchlist;

use serde::Deserialize;

/// Plain `{"message": ...}` acknowledgment many mutation endpoints return.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
