//! Health payload for the monitoring route.

use serde::Serialize;
use utoipa::ToSchema;

/// Health payload returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when no generative-model credentials are
    /// configured and generation requests will be rejected.
    pub status: String,
}

impl HealthResponse {
    /// Build the payload from the current degraded flag.
    pub fn from_degraded(degraded: bool) -> Self {
        let status = if degraded { "degraded" } else { "ok" };
        Self {
            status: status.to_string(),
        }
    }
}
