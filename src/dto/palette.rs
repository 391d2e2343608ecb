//! DTO projections of the color-harmony engine for the palette preview route.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::color::{
    contrast::{contrast_ratio, is_light, passes_aa, relative_luminance},
    harmony::{HarmonyPalette, PaletteColor, SemanticSuggestions},
};

/// Query parameters accepted by the palette preview route.
#[derive(Debug, Deserialize)]
pub struct PaletteQuery {
    /// Seed color as `#RRGGBB`.
    pub primary: String,
}

/// Overlay text color for legible labels on a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InkColor {
    /// Dark text on a light swatch.
    Dark,
    /// Light text on a dark swatch.
    Light,
}

/// Legibility metadata attached to every derived swatch.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwatchAnnotation {
    /// Palette role or semantic category of this swatch.
    pub role: String,
    /// The swatch color.
    pub hex: String,
    /// WCAG relative luminance of the color.
    pub luminance: f64,
    /// Contrast ratio against white.
    pub contrast_on_white: f64,
    /// Contrast ratio against black.
    pub contrast_on_black: f64,
    /// Whether white text on this swatch passes WCAG AA.
    pub aa_with_white: bool,
    /// Whether black text on this swatch passes WCAG AA.
    pub aa_with_black: bool,
    /// Recommended overlay ink for labels on this swatch.
    pub ink: InkColor,
}

impl SwatchAnnotation {
    /// Evaluate the legibility metadata for one swatch.
    pub fn evaluate(role: impl Into<String>, hex: impl Into<String>) -> Self {
        let hex = hex.into();
        Self {
            role: role.into(),
            luminance: relative_luminance(&hex),
            contrast_on_white: contrast_ratio(&hex, "#ffffff"),
            contrast_on_black: contrast_ratio(&hex, "#000000"),
            aa_with_white: passes_aa(&hex, "#ffffff"),
            aa_with_black: passes_aa(&hex, "#000000"),
            ink: if is_light(&hex) {
                InkColor::Dark
            } else {
                InkColor::Light
            },
            hex,
        }
    }
}

/// One harmony palette with annotated swatches.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnnotatedPalette {
    /// Harmony rule the palette was derived with.
    pub name: String,
    /// Annotated `primary`/`secondary`/`accent` swatches.
    pub colors: Vec<SwatchAnnotation>,
}

impl From<HarmonyPalette> for AnnotatedPalette {
    fn from(palette: HarmonyPalette) -> Self {
        Self {
            name: palette.name.to_string(),
            colors: palette
                .colors
                .into_iter()
                .map(|PaletteColor { role, hex }| SwatchAnnotation::evaluate(role, hex))
                .collect(),
        }
    }
}

/// Semantic candidate colors with annotated swatches.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnnotatedSemantics {
    /// Green-family candidates.
    pub success: Vec<SwatchAnnotation>,
    /// Amber/gold-family candidates.
    pub warning: Vec<SwatchAnnotation>,
    /// Red-family candidates.
    pub error: Vec<SwatchAnnotation>,
    /// Blue-family candidates.
    pub info: Vec<SwatchAnnotation>,
}

impl From<SemanticSuggestions> for AnnotatedSemantics {
    fn from(suggestions: SemanticSuggestions) -> Self {
        let annotate = |category: &'static str, candidates: [String; 3]| {
            candidates
                .into_iter()
                .map(|hex| SwatchAnnotation::evaluate(category, hex))
                .collect()
        };

        Self {
            success: annotate("success", suggestions.success),
            warning: annotate("warning", suggestions.warning),
            error: annotate("error", suggestions.error),
            info: annotate("info", suggestions.info),
        }
    }
}

/// Full response of the palette preview route.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaletteOptionsResponse {
    /// Seed color the options were derived from, verbatim.
    pub primary: String,
    /// The five harmony palettes.
    pub harmonies: Vec<AnnotatedPalette>,
    /// Semantic candidates per category.
    pub semantic: AnnotatedSemantics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_picks_dark_ink_on_light_swatches() {
        let light = SwatchAnnotation::evaluate("primary", "#ffffff");
        assert_eq!(light.ink, InkColor::Dark);
        assert!(light.aa_with_black);
        assert!(!light.aa_with_white);

        let dark = SwatchAnnotation::evaluate("primary", "#101010");
        assert_eq!(dark.ink, InkColor::Light);
        assert!(dark.aa_with_white);
    }

    #[test]
    fn annotation_serializes_in_camel_case() {
        let annotation = SwatchAnnotation::evaluate("accent", "#6aabdb");
        let encoded = serde_json::to_string(&annotation).unwrap();
        assert!(encoded.contains("\"contrastOnWhite\""));
        assert!(encoded.contains("\"ink\":\"dark\""));
    }
}
