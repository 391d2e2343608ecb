//! Google Fonts proxy route.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::fonts::{FontFacesResponse, FontQuery},
    error::AppError,
    services::font_service,
    state::SharedState,
};

/// Routes proxying Google Fonts face lookups.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/fonts", get(font_faces))
}

/// Resolve the regular and bold TTF faces of a Google Fonts family.
#[utoipa::path(
    get,
    path = "/api/fonts",
    tag = "fonts",
    params(("family" = String, Query, description = "Google Fonts family name")),
    responses(
        (status = 200, description = "Font faces resolved", body = FontFacesResponse),
        (status = 400, description = "Missing or empty family parameter"),
        (status = 502, description = "Stylesheet fetch or parse failed")
    )
)]
pub async fn font_faces(
    State(state): State<SharedState>,
    Query(query): Query<FontQuery>,
) -> Result<Json<FontFacesResponse>, AppError> {
    let faces = font_service::font_faces(&state, &query.family).await?;
    Ok(Json(faces))
}
