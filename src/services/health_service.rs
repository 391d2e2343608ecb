//! Health check service.

use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with the current health payload, logging degraded operation.
pub fn health_status(state: &SharedState) -> HealthResponse {
    let degraded = state.is_degraded();
    if degraded {
        warn!("generative model unavailable (degraded mode)");
    }
    HealthResponse::from_degraded(degraded)
}
