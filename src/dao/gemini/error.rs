//! Error types shared by the Gemini access layer.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenient result alias returning [`GeminiError`] failures.
pub type GeminiResult<T> = Result<T, GeminiError>;

/// Failures that can occur while talking to the Gemini API.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Required environment variable is missing.
    #[error("missing Gemini environment variable `{var}`")]
    MissingEnvVar {
        /// Name of the missing variable.
        var: &'static str,
    },
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build Gemini client")]
    ClientBuilder {
        /// Underlying builder failure.
        #[source]
        source: reqwest::Error,
    },
    /// The request could not be sent.
    #[error("failed to send request to Gemini model `{model}`")]
    RequestSend {
        /// Model the request was addressed to.
        model: String,
        /// Underlying transport failure.
        #[source]
        source: reqwest::Error,
    },
    /// The API kept answering 429 until the retry budget ran out.
    #[error("Gemini rate limit persisted across {attempts} attempts")]
    RateLimited {
        /// Number of attempts made.
        attempts: u32,
    },
    /// The API returned an unexpected status code.
    #[error("unexpected Gemini response status {status} for model `{model}`")]
    RequestStatus {
        /// Model the request was addressed to.
        model: String,
        /// Status code received.
        status: StatusCode,
    },
    /// Response payload could not be parsed as JSON.
    #[error("failed to decode Gemini response for model `{model}`")]
    DecodeResponse {
        /// Model the request was addressed to.
        model: String,
        /// Underlying decode failure.
        #[source]
        source: reqwest::Error,
    },
    /// The response contained no candidate text.
    #[error("Gemini response for model `{model}` contained no text candidate")]
    EmptyResponse {
        /// Model the request was addressed to.
        model: String,
    },
}
