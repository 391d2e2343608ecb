//! Brand brief collected by the wizard frontend.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::validation::validate_hex_color;

/// Brand attributes submitted by the wizard once every step is complete.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BrandBrief {
    /// Company or product name the design system is generated for.
    #[validate(length(min = 1, message = "company name must not be empty"))]
    pub company_name: String,
    /// Industry the company operates in.
    pub industry: String,
    /// Optional uploaded logo as a base64 data URI; carried through to the
    /// generated design system verbatim.
    #[serde(default)]
    pub logo: Option<String>,
    /// Optional user-chosen primary color as `#RRGGBB`. When present it is
    /// preserved exactly and expanded into harmony options for the model.
    #[serde(default)]
    #[validate(custom(function = validate_hex_color))]
    pub primary_color: Option<String>,
    /// Adjectives describing the brand personality.
    pub adjectives: Vec<String>,
    /// Description of the target audience.
    pub target_audience: String,
    /// Selected color mood label.
    pub color_mood: String,
    /// Selected typography style preset.
    pub typography_style: String,
    /// Layout density from 0 (minimal/airy) to 100 (rich/detailed).
    #[validate(range(max = 100))]
    pub design_density: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief_json(primary: &str) -> String {
        format!(
            r##"{{
                "companyName": "Acme",
                "industry": "SaaS",
                "primaryColor": {primary},
                "adjectives": ["bold", "friendly"],
                "targetAudience": "developers",
                "colorMood": "vibrant",
                "typographyStyle": "modern",
                "designDensity": 50
            }}"##
        )
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let brief: BrandBrief = serde_json::from_str(&brief_json("\"#6aabdb\"")).unwrap();
        assert_eq!(brief.company_name, "Acme");
        assert_eq!(brief.primary_color.as_deref(), Some("#6aabdb"));
        assert_eq!(brief.logo, None);
        assert!(brief.validate().is_ok());
    }

    #[test]
    fn absent_primary_color_is_valid() {
        let brief: BrandBrief = serde_json::from_str(&brief_json("null")).unwrap();
        assert_eq!(brief.primary_color, None);
        assert!(brief.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_primary_color() {
        let brief: BrandBrief = serde_json::from_str(&brief_json("\"6aabdb\"")).unwrap();
        assert!(brief.validate().is_err());
    }

    #[test]
    fn rejects_empty_company_name() {
        let mut brief: BrandBrief = serde_json::from_str(&brief_json("null")).unwrap();
        brief.company_name.clear();
        assert!(brief.validate().is_err());
    }
}
