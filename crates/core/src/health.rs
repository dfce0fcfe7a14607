//! Backend health indicator state.
//!
//! Mirrors the status-dot widget: probe once on mount, then every 30
//! seconds. Healthy means exactly "the payload parsed and says healthy".
//! Everything else (transport failure, error status, malformed payload)
//! is unhealthy, carrying the raw failure reason for the hover tooltip.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::api::HealthGateway;
use crate::messages::Language;
use crate::models::health::HealthPayload;

pub const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Current verdict of the indicator.
#[derive(Debug, Clone, PartialEq)]
pub enum HealthState {
    /// No probe has completed yet.
    Checking,
    Healthy(HealthPayload),
    /// The raw failure reason plus the local time of the failed probe.
    Unhealthy { reason: String, checked_at: String },
}

/// State container behind the indicator widget.
pub struct HealthMonitor {
    gateway: Arc<dyn HealthGateway>,
    state: Arc<RwLock<HealthState>>,
}

impl HealthMonitor {
    #[must_use]
    pub fn new(gateway: Arc<dyn HealthGateway>) -> Self {
        Self {
            gateway,
            state: Arc::new(RwLock::new(HealthState::Checking)),
        }
    }

    #[must_use]
    pub fn state(&self) -> HealthState {
        self.state
            .read()
            .map(|s| s.clone())
            .unwrap_or(HealthState::Checking)
    }

    #[must_use]
    pub fn is_healthy(&self) -> bool {
        matches!(self.state(), HealthState::Healthy(_))
    }

    /// Run one probe and store the verdict.
    pub async fn check_now(&self) {
        let verdict = match self.gateway.check().await {
            Ok(payload) if payload.is_healthy() => HealthState::Healthy(payload),
            Ok(payload) => HealthState::Unhealthy {
                reason: format!("status: {}", payload.status),
                checked_at: now_iso(),
            },
            Err(e) => HealthState::Unhealthy {
                reason: e.to_string(),
                checked_at: now_iso(),
            },
        };
        if let Ok(mut state) = self.state.write() {
            *state = verdict;
        }
    }

    /// Probe immediately, then every [`HEALTH_POLL_INTERVAL`]. The poll
    /// stops when the returned guard is dropped.
    #[must_use]
    pub fn spawn(self: &Arc<Self>, interval: Duration) -> PollGuard {
        let monitor = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                monitor.check_now().await;
            }
        });
        PollGuard {
            handle: handle.abort_handle(),
        }
    }

    /// Hover-tooltip text for the current state.
    #[must_use]
    pub fn status_text(&self, lang: Language) -> String {
        match self.state() {
            HealthState::Checking => match lang {
                Language::De => "Prüfe Backend-Status...".to_string(),
                Language::En => "Checking backend status...".to_string(),
            },
            HealthState::Healthy(payload) => {
                let database = payload.database.as_deref().unwrap_or(unknown(lang));
                let timestamp = payload.timestamp.as_deref().unwrap_or(unknown(lang));
                match lang {
                    Language::De => format!(
                        "Backend ist erreichbar und gesund\n\nDatenbank: {database}\nZeitstempel: {timestamp}"
                    ),
                    Language::En => format!(
                        "Backend is reachable and healthy\n\nDatabase: {database}\nTimestamp: {timestamp}"
                    ),
                }
            }
            HealthState::Unhealthy { reason, checked_at } => match lang {
                Language::De => format!(
                    "Backend ist nicht erreichbar oder ungesund\n\nFehler: {reason}\nZeitstempel: {checked_at}"
                ),
                Language::En => format!(
                    "Backend is unreachable or unhealthy\n\nError: {reason}\nTimestamp: {checked_at}"
                ),
            },
        }
    }
}

/// Aborts the polling task on drop so the poll never outlives the widget.
pub struct PollGuard {
    handle: tokio::task::AbortHandle,
}

impl Drop for PollGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

fn unknown(lang: Language) -> &'static str {
    match lang {
        Language::De => "unbekannt",
        Language::En => "unknown",
    }
}
