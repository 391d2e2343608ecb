//! Structured design-system document produced by the generative model.
//!
//! Field names mirror the JSON contract embedded in the generation prompt;
//! the document is decoded from the model response, enriched with the
//! uploaded logo and a timestamp, and returned to the frontend unchanged.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A named, purposed color swatch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ColorSwatch {
    /// Display name of the color.
    pub name: String,
    /// `#RRGGBB` value.
    pub hex: String,
    /// When to use the color.
    pub usage: String,
}

/// Colors carrying a fixed UI meaning rather than a brand role.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SemanticColors {
    /// Positive confirmation color.
    pub success: ColorSwatch,
    /// Cautionary color.
    pub warning: ColorSwatch,
    /// Failure color.
    pub error: ColorSwatch,
    /// Informational color.
    pub info: ColorSwatch,
}

/// Brand color roles plus the neutral ramp and semantic assignments.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BrandColors {
    /// Primary brand color.
    pub primary: ColorSwatch,
    /// Secondary brand color.
    pub secondary: ColorSwatch,
    /// Accent color for highlights.
    pub accent: ColorSwatch,
    /// Neutral ramp from lightest to darkest, usually five entries.
    pub neutrals: Vec<ColorSwatch>,
    /// Semantic color assignments.
    pub semantic: SemanticColors,
}

/// One step of the typographic scale.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeScaleEntry {
    /// Step name, e.g. `Display` or `Body`.
    pub name: String,
    /// Font size with unit, e.g. `16px`.
    pub size: String,
    /// Unitless line height, e.g. `1.6`.
    pub line_height: String,
    /// Font weight, e.g. `400`.
    pub weight: String,
    /// Intended usage of the step.
    pub usage: String,
}

/// Font choices and the typographic scale.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypographySpec {
    /// Google Fonts family used for headings.
    pub heading_font: String,
    /// Google Fonts family used for body copy.
    pub body_font: String,
    /// Scale from display size down to fine print.
    pub scale: Vec<TypeScaleEntry>,
}

/// Simple name/value pair used by spacing and radius scales.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NamedValue {
    /// Step name, e.g. `md`.
    pub name: String,
    /// CSS value, e.g. `16px`.
    pub value: String,
}

/// One elevation shadow definition.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShadowSpec {
    /// Shadow name, e.g. `md`.
    pub name: String,
    /// CSS box-shadow value.
    pub value: String,
    /// Intended usage of the elevation step.
    pub usage: String,
}

/// Spacing system: base unit, scale, radii and shadows.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpacingSpec {
    /// Base spacing unit in pixels.
    pub base_unit: u32,
    /// Spacing steps from `xs` upwards.
    pub scale: Vec<NamedValue>,
    /// Border radius steps.
    pub border_radius: Vec<NamedValue>,
    /// Elevation shadows.
    pub shadows: Vec<ShadowSpec>,
}

/// Usage rules for the brand logo.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoGuidelines {
    /// Description of the ideal logo concept.
    pub description: String,
    /// Clear-space rule around the mark.
    pub clear_space_rule: String,
    /// Minimum reproduction size.
    pub minimum_size: String,
    /// Things not to do with the logo.
    pub donts: Vec<String>,
}

/// Verbal identity of the brand.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandVoice {
    /// Voice description.
    pub personality: String,
    /// Tone words.
    pub tone_attributes: Vec<String>,
    /// Writing guidelines to follow.
    pub dos: Vec<String>,
    /// Writing mistakes to avoid.
    pub donts: Vec<String>,
    /// Example headline in brand voice.
    pub sample_headline: String,
    /// Example paragraph in brand voice.
    pub sample_body_copy: String,
}

/// Complete design-system document returned to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystem {
    /// The company name, possibly refined by the model.
    pub brand_name: String,
    /// Short brand tagline.
    pub tagline: String,
    /// Brand positioning statement.
    pub brand_overview: String,
    /// Color system.
    pub colors: BrandColors,
    /// Typography system.
    pub typography: TypographySpec,
    /// Spacing system.
    pub spacing: SpacingSpec,
    /// Logo usage rules.
    pub logo_guidelines: LogoGuidelines,
    /// Verbal identity.
    pub brand_voice: BrandVoice,
    /// User-uploaded logo data URI, attached by the backend after decoding.
    #[serde(default)]
    pub generated_logo_url: Option<String>,
    /// RFC 3339 generation timestamp, stamped by the backend.
    #[serde(default)]
    pub generated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compact fixture shaped like a model response (no backend fields).
    const MODEL_PAYLOAD: &str = r##"{
        "brandName": "Acme",
        "tagline": "Build boldly",
        "brandOverview": "Acme builds tools for builders.",
        "colors": {
            "primary": {"name": "Sky", "hex": "#6aabdb", "usage": "Buttons"},
            "secondary": {"name": "Sand", "hex": "#dbb96a", "usage": "Panels"},
            "accent": {"name": "Coral", "hex": "#db6a8a", "usage": "Highlights"},
            "neutrals": [
                {"name": "White", "hex": "#ffffff", "usage": "Backgrounds"},
                {"name": "Ink", "hex": "#1a1a1a", "usage": "Text"}
            ],
            "semantic": {
                "success": {"name": "Green", "hex": "#2e9e5b", "usage": "Success"},
                "warning": {"name": "Amber", "hex": "#d99a2b", "usage": "Warnings"},
                "error": {"name": "Red", "hex": "#d93b3b", "usage": "Errors"},
                "info": {"name": "Blue", "hex": "#2b7bd9", "usage": "Info"}
            }
        },
        "typography": {
            "headingFont": "Inter",
            "bodyFont": "Source Sans 3",
            "scale": [
                {"name": "H1", "size": "36px", "lineHeight": "1.2", "weight": "700", "usage": "Page titles"}
            ]
        },
        "spacing": {
            "baseUnit": 8,
            "scale": [{"name": "md", "value": "16px"}],
            "borderRadius": [{"name": "md", "value": "8px"}],
            "shadows": [{"name": "md", "value": "0 4px 12px rgba(0,0,0,0.1)", "usage": "Cards"}]
        },
        "logoGuidelines": {
            "description": "Abstract mark",
            "clearSpaceRule": "One mark height",
            "minimumSize": "24px",
            "donts": ["Do not stretch"]
        },
        "brandVoice": {
            "personality": "Confident and warm",
            "toneAttributes": ["bold"],
            "dos": ["Be direct"],
            "donts": ["No jargon"],
            "sampleHeadline": "Build boldly",
            "sampleBodyCopy": "Acme helps you ship."
        }
    }"##;

    #[test]
    fn decodes_model_payload_without_backend_fields() {
        let system: DesignSystem = serde_json::from_str(MODEL_PAYLOAD).unwrap();
        assert_eq!(system.brand_name, "Acme");
        assert_eq!(system.colors.primary.hex, "#6aabdb");
        assert_eq!(system.typography.heading_font, "Inter");
        assert_eq!(system.spacing.base_unit, 8);
        assert_eq!(system.generated_logo_url, None);
        assert_eq!(system.generated_at, None);
    }

    #[test]
    fn round_trips_backend_fields_in_camel_case() {
        let mut system: DesignSystem = serde_json::from_str(MODEL_PAYLOAD).unwrap();
        system.generated_logo_url = Some("data:image/png;base64,AAAA".into());
        let encoded = serde_json::to_string(&system).unwrap();
        assert!(encoded.contains("\"generatedLogoUrl\""));
        assert!(encoded.contains("\"brandName\""));
        assert!(encoded.contains("\"lineHeight\""));
    }
}
