//! Two-tier error taxonomy: service-level failures and their HTTP mapping.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

use crate::dao::{gemini::GeminiError, google_fonts::FontsError};

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No generative-model client is configured (degraded mode).
    #[error("generation unavailable (degraded mode)")]
    Degraded,
    /// The generative model could not be reached or answered abnormally.
    #[error("generation failed: {0}")]
    Upstream(#[source] GeminiError),
    /// The model answered, but the payload was not a valid design system.
    #[error("model returned an invalid design system: {0}")]
    UpstreamPayload(#[source] serde_json::Error),
    /// A font family could not be resolved upstream.
    #[error("font lookup failed: {0}")]
    FontLookup(#[source] FontsError),
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<GeminiError> for ServiceError {
    fn from(err: GeminiError) -> Self {
        ServiceError::Upstream(err)
    }
}

impl From<FontsError> for ServiceError {
    fn from(err: FontsError) -> Self {
        ServiceError::FontLookup(err)
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// An upstream dependency failed while handling the request.
    #[error("upstream failure: {0}")]
    UpstreamFailure(String),
    /// Service unavailable or degraded.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Degraded => AppError::ServiceUnavailable("degraded mode".into()),
            ServiceError::Upstream(GeminiError::RateLimited { attempts }) => {
                AppError::ServiceUnavailable(format!("model rate limited after {attempts} attempts"))
            }
            ServiceError::Upstream(source) => AppError::UpstreamFailure(source.to_string()),
            ServiceError::UpstreamPayload(source) => {
                AppError::UpstreamFailure(format!("invalid model payload: {source}"))
            }
            ServiceError::FontLookup(source) => AppError::UpstreamFailure(source.to_string()),
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpstreamFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}
