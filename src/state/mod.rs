//! Shared application state wiring configuration, upstream clients and caches.

pub mod fonts;

use std::sync::Arc;

use crate::{
    config::AppConfig,
    dao::{gemini::GeminiClient, google_fonts::FontsClient},
};

pub use self::fonts::FontCache;

/// Cheaply cloneable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state shared by every request handler.
pub struct AppState {
    config: AppConfig,
    gemini: Option<GeminiClient>,
    fonts_client: FontsClient,
    font_cache: FontCache,
}

impl AppState {
    /// Construct the state wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// `gemini` is `None` when no API key is configured; the service then
    /// runs in degraded mode and rejects generation requests while still
    /// serving the pure color routes.
    pub fn new(config: AppConfig, gemini: Option<GeminiClient>, fonts_client: FontsClient) -> SharedState {
        Arc::new(Self {
            config,
            gemini,
            fonts_client,
            font_cache: FontCache::new(),
        })
    }

    /// Immutable runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Handle to the generative-model client, if one is configured.
    pub fn gemini(&self) -> Option<&GeminiClient> {
        self.gemini.as_ref()
    }

    /// True when no generative-model client is available.
    pub fn is_degraded(&self) -> bool {
        self.gemini.is_none()
    }

    /// Client used to resolve Google Fonts stylesheets.
    pub fn fonts_client(&self) -> &FontsClient {
        &self.fonts_client
    }

    /// Per-process cache of resolved font faces.
    pub fn font_cache(&self) -> &FontCache {
        &self.font_cache
    }
}
