//! Design-system generation route.

use axum::{Json, Router, extract::State, routing::post};
use axum_valid::Valid;

use crate::{
    dto::{brand::BrandBrief, design_system::DesignSystem},
    error::AppError,
    services::generation_service,
    state::SharedState,
};

/// Routes handling design-system generation.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/generate", post(generate_design_system))
}

/// Generate a complete design system from the submitted brand brief.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "generation",
    request_body = BrandBrief,
    responses(
        (status = 200, description = "Design system generated", body = DesignSystem),
        (status = 400, description = "Invalid brand brief"),
        (status = 502, description = "Model request or payload failed"),
        (status = 503, description = "No generative model configured (degraded mode)")
    )
)]
pub async fn generate_design_system(
    State(state): State<SharedState>,
    Valid(Json(brief)): Valid<Json<BrandBrief>>,
) -> Result<Json<DesignSystem>, AppError> {
    let system = generation_service::generate_design_system(&state, brief).await?;
    Ok(Json(system))
}
