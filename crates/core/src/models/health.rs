use serde::Deserialize;

/// Raw payload of `GET /api/health`. Anything other than a parseable body
/// with `status == "healthy"` counts as unhealthy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthPayload {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
}

impl HealthPayload {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
