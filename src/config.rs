//! Application-level configuration loading for upstream endpoints and retry
//! budgets. Secrets never live here; the Gemini API key comes from the
//! environment.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "BRANDFORGE_BACK_CONFIG_PATH";

/// Default Gemini REST endpoint.
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default text model used for design-system generation.
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
/// Default Google Fonts stylesheet endpoint.
const DEFAULT_FONTS_CSS_URL: &str = "https://fonts.googleapis.com/css2";
/// Default attempt budget for rate-limited generation requests.
const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Default initial backoff before retrying a rate-limited request.
const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Gemini REST endpoint base URL.
    pub gemini_base_url: String,
    /// Model identifier used for design-system generation.
    pub gemini_model: String,
    /// Google Fonts `css2` endpoint.
    pub fonts_css_url: String,
    /// Attempt budget for rate-limited generation requests.
    pub max_attempts: u32,
    /// Initial backoff in milliseconds before retrying a rate-limited request.
    pub initial_backoff_ms: u64,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the
    /// baked-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        model = %config.gemini_model,
                        "loaded configuration"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            fonts_css_url: DEFAULT_FONTS_CSS_URL.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_backoff_ms: DEFAULT_INITIAL_BACKOFF_MS,
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    gemini: RawGeminiConfig,
    #[serde(default)]
    fonts: RawFontsConfig,
}

#[derive(Debug, Default, Deserialize)]
/// Gemini section of the configuration file.
struct RawGeminiConfig {
    base_url: Option<String>,
    model: Option<String>,
    max_attempts: Option<u32>,
    initial_backoff_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
/// Fonts section of the configuration file.
struct RawFontsConfig {
    css_url: Option<String>,
}

impl From<RawConfig> for AppConfig {
    fn from(raw: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            gemini_base_url: raw.gemini.base_url.unwrap_or(defaults.gemini_base_url),
            gemini_model: raw.gemini.model.unwrap_or(defaults.gemini_model),
            fonts_css_url: raw.fonts.css_url.unwrap_or(defaults.fonts_css_url),
            max_attempts: raw.gemini.max_attempts.unwrap_or(defaults.max_attempts),
            initial_backoff_ms: raw
                .gemini
                .initial_backoff_ms
                .unwrap_or(defaults.initial_backoff_ms),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let raw: RawConfig =
            serde_json::from_str(r#"{"gemini": {"model": "gemini-2.5-pro"}}"#).unwrap();
        let config: AppConfig = raw.into();
        assert_eq!(config.gemini_model, "gemini-2.5-pro");
        assert_eq!(config.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.fonts_css_url, DEFAULT_FONTS_CSS_URL);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn empty_file_equals_defaults() {
        let raw: RawConfig = serde_json::from_str("{}").unwrap();
        let config: AppConfig = raw.into();
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.initial_backoff_ms, DEFAULT_INITIAL_BACKOFF_MS);
    }
}
