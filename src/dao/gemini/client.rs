//! HTTP client wrapper handling transport, retries and payload extraction.

use std::time::Duration;

use rand::Rng;
use reqwest::{Client, StatusCode};
use tokio::time::sleep;
use tracing::{debug, warn};

use super::{
    config::GeminiConfig,
    error::{GeminiError, GeminiResult},
    models::{GenerateContentRequest, GenerateContentResponse},
};

/// Upper bound applied to the retry backoff delay.
const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Build the underlying HTTP client.
    pub fn new(config: GeminiConfig) -> GeminiResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| GeminiError::ClientBuilder { source })?;
        Ok(Self { client, config })
    }

    /// Model identifier this client generates with.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Send a prompt and return the model's raw text payload.
    ///
    /// 429 responses are retried with exponential backoff and jitter until
    /// the configured attempt budget runs out; every other non-success
    /// status fails immediately.
    pub async fn generate_json(&self, prompt: &str) -> GeminiResult<String> {
        let body = GenerateContentRequest::json_prompt(prompt);
        let mut delay = Duration::from_millis(self.config.initial_backoff_ms);

        for attempt in 1..=self.config.max_attempts {
            let response = self
                .client
                .post(self.endpoint())
                .header("x-goog-api-key", &self.config.api_key)
                .json(&body)
                .send()
                .await
                .map_err(|source| GeminiError::RequestSend {
                    model: self.config.model.clone(),
                    source,
                })?;

            match response.status() {
                StatusCode::TOO_MANY_REQUESTS => {
                    let pause = delay + jitter(delay);
                    warn!(
                        model = %self.config.model,
                        attempt,
                        delay_ms = pause.as_millis() as u64,
                        "Gemini rate limited; backing off"
                    );
                    sleep(pause).await;
                    delay = (delay * 2).min(MAX_BACKOFF);
                }
                status if status.is_success() => {
                    let payload = response
                        .json::<GenerateContentResponse>()
                        .await
                        .map_err(|source| GeminiError::DecodeResponse {
                            model: self.config.model.clone(),
                            source,
                        })?;
                    debug!(model = %self.config.model, attempt, "Gemini generation succeeded");
                    return payload.first_text().ok_or_else(|| GeminiError::EmptyResponse {
                        model: self.config.model.clone(),
                    });
                }
                status => {
                    return Err(GeminiError::RequestStatus {
                        model: self.config.model.clone(),
                        status,
                    });
                }
            }
        }

        Err(GeminiError::RateLimited {
            attempts: self.config.max_attempts,
        })
    }
}

/// Small random fraction of the base delay, spreading concurrent retries.
fn jitter(base: Duration) -> Duration {
    let cap = (base.as_millis() as u64 / 4).max(1);
    Duration::from_millis(rand::rng().random_range(0..cap))
}
