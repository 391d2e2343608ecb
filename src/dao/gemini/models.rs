//! Wire models for the `generateContent` endpoint, limited to the fields the
//! service actually sends and reads.

use serde::{Deserialize, Serialize};

/// Request body of `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

/// One conversation turn.
#[derive(Debug, Serialize)]
pub(super) struct Content {
    pub parts: Vec<Part>,
}

/// A text fragment of a turn or candidate.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct Part {
    #[serde(default)]
    pub text: String,
}

/// Generation settings; the design system is always requested as JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerationConfig {
    pub response_mime_type: &'static str,
}

impl GenerateContentRequest {
    /// Build a single-turn text request asking for a JSON response.
    pub fn json_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        }
    }
}

/// Response body of `models/{model}:generateContent`.
#[derive(Debug, Deserialize)]
pub(super) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generation candidate.
#[derive(Debug, Deserialize)]
pub(super) struct Candidate {
    pub content: Option<CandidateContent>,
}

/// Content block of a candidate.
#[derive(Debug, Deserialize)]
pub(super) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn first_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text: String = candidate
            .content?
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case_config() {
        let request = GenerateContentRequest::json_prompt("hello");
        let encoded = serde_json::to_string(&request).unwrap();
        assert!(encoded.contains("\"responseMimeType\":\"application/json\""));
        assert!(encoded.contains("\"text\":\"hello\""));
    }

    #[test]
    fn extracts_first_candidate_text() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\""},{"text":":1}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_text().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(response.first_text(), None);

        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert_eq!(response.first_text(), None);
    }
}
