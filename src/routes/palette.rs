//! Palette preview route exposing the color-harmony engine.

use axum::{Json, Router, extract::Query, routing::get};

use crate::{
    dto::palette::{PaletteOptionsResponse, PaletteQuery},
    error::AppError,
    services::palette_service,
    state::SharedState,
};

/// Routes serving deterministic palette derivations.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/palettes", get(palette_options))
}

/// Derive the five harmony palettes and semantic candidates for a seed
/// color, each swatch annotated with contrast and legibility metadata.
#[utoipa::path(
    get,
    path = "/api/palettes",
    tag = "palettes",
    params(("primary" = String, Query, description = "Seed color as #RRGGBB")),
    responses(
        (status = 200, description = "Palette options derived", body = PaletteOptionsResponse),
        (status = 400, description = "Malformed seed color")
    )
)]
pub async fn palette_options(
    Query(query): Query<PaletteQuery>,
) -> Result<Json<PaletteOptionsResponse>, AppError> {
    let options = palette_service::palette_options(&query.primary)?;
    Ok(Json(options))
}
