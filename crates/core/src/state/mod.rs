//! Per-view data-fetch state containers.
//!
//! Each container is independent: there is no shared cache and no
//! cross-container invalidation. A view drives its own container and
//! re-renders from snapshots; mutations trigger an explicit refetch of
//! whatever list they touched.

pub mod analysis;
pub mod resource;
pub mod user;

pub use analysis::{PortfolioAnalysisStore, WatchlistAnalysisStore};
pub use resource::{Resource, ResourceSnapshot};
pub use user::{ProfileStore, SettingsStore};
