//! Font proxy service with per-process memoization.

use tracing::debug;

use crate::{dto::fonts::FontFacesResponse, error::ServiceError, state::SharedState};

/// Resolve the regular/bold faces for a family, consulting the cache first.
pub async fn font_faces(
    state: &SharedState,
    family: &str,
) -> Result<FontFacesResponse, ServiceError> {
    let family = family.trim();
    if family.is_empty() {
        return Err(ServiceError::InvalidInput("missing font family".into()));
    }

    if let Some(assets) = state.font_cache().get(family) {
        debug!(family, "font faces served from cache");
        return Ok(assets.into());
    }

    let assets = state.fonts_client().fetch_faces(family).await?;
    state.font_cache().insert(family, assets.clone());
    debug!(family, cached = state.font_cache().len(), "font faces resolved");
    Ok(assets.into())
}
