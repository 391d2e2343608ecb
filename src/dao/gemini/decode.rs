//! Defensive decoding of model output.

use serde::de::DeserializeOwned;

/// Decode a JSON payload that may arrive wrapped in markdown code fences.
///
/// Tries a straight parse first; on failure strips ```` ```json ````/
/// ```` ``` ```` fences, trims, and parses once more. The second error is
/// the one reported.
pub fn decode_fenced_json<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(_) => {
            let cleaned = text.replace("```json", "").replace("```", "");
            serde_json::from_str(cleaned.trim())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn parses_clean_json() {
        let value: Value = decode_fenced_json(r#"{"brandName":"Acme"}"#).unwrap();
        assert_eq!(value["brandName"], "Acme");
    }

    #[test]
    fn strips_markdown_fences() {
        let fenced = "```json\n{\"brandName\":\"Acme\"}\n```\n";
        let value: Value = decode_fenced_json(fenced).unwrap();
        assert_eq!(value["brandName"], "Acme");
    }

    #[test]
    fn strips_bare_fences() {
        let fenced = "```\n[1, 2, 3]\n```";
        let value: Value = decode_fenced_json(fenced).unwrap();
        assert_eq!(value, Value::from(vec![1, 2, 3]));
    }

    #[test]
    fn reports_error_for_garbage() {
        let result: Result<Value, _> = decode_fenced_json("the model had a bad day");
        assert!(result.is_err());
    }
}
