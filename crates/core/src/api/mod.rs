//! The HTTP client: single point of contact with the RoboAdvisor backend.
//!
//! `client.rs` owns the request core (bearer token, body-as-text read,
//! JSON parse, status classification, diagnostic logging); the sibling
//! modules add one thin method per backend capability; `files.rs` covers
//! the binary endpoints that bypass the generic JSON path; `gateway.rs`
//! holds the trait seams the state containers consume.

mod auth;
mod client;
mod files;
mod gateway;
mod history;
mod portfolio;
mod user;
mod watchlist;

pub use client::ApiClient;
pub use gateway::{AnalysisGateway, HealthGateway, UserGateway};
