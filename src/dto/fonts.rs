//! Wire types for the Google Fonts proxy route.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::google_fonts::FontAssets;

/// Query parameters accepted by the fonts route.
#[derive(Debug, Deserialize)]
pub struct FontQuery {
    /// Google Fonts family name, e.g. `Source Sans 3`.
    pub family: String,
}

/// Download URLs for the regular and bold faces of a font family.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FontFacesResponse {
    /// URL of the weight-400 TTF file; empty when that face is missing.
    pub regular_url: String,
    /// URL of the weight-700 TTF file; empty when that face is missing.
    pub bold_url: String,
}

impl From<FontAssets> for FontFacesResponse {
    fn from(assets: FontAssets) -> Self {
        Self {
            regular_url: assets.regular_url,
            bold_url: assets.bold_url,
        }
    }
}
