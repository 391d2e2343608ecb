//! Orchestrates design-system generation against the generative model.

use std::time::SystemTime;

use tracing::{debug, info};

use crate::{
    color::harmony::format_harmony_options_for_prompt,
    dao::gemini::decode_fenced_json,
    dto::{brand::BrandBrief, design_system::DesignSystem, format_system_time},
    error::ServiceError,
    state::SharedState,
};

/// JSON document shape the model must return, embedded verbatim in the
/// prompt. Decoding in [`DesignSystem`] follows this structure exactly.
const RESPONSE_CONTRACT: &str = r##"{
  "brandName": "string — the company name, possibly refined",
  "tagline": "string — a short, punchy brand tagline",
  "brandOverview": "string — 2-3 sentence brand positioning statement",
  "colors": {
    "primary": { "name": "string", "hex": "#XXXXXX", "usage": "string — when to use" },
    "secondary": { "name": "string", "hex": "#XXXXXX", "usage": "string" },
    "accent": { "name": "string", "hex": "#XXXXXX", "usage": "string" },
    "neutrals": [
      { "name": "string", "hex": "#XXXXXX", "usage": "string" }
    ],
    "semantic": {
      "success": { "name": "string", "hex": "#XXXXXX", "usage": "string" },
      "warning": { "name": "string", "hex": "#XXXXXX", "usage": "string" },
      "error": { "name": "string", "hex": "#XXXXXX", "usage": "string" },
      "info": { "name": "string", "hex": "#XXXXXX", "usage": "string" }
    }
  },
  "typography": {
    "headingFont": "string — exact Google Fonts name",
    "bodyFont": "string — exact Google Fonts name",
    "scale": [
      { "name": "Display", "size": "48px", "lineHeight": "1.1", "weight": "700", "usage": "Hero headlines" },
      { "name": "H1", "size": "36px", "lineHeight": "1.2", "weight": "700", "usage": "Page titles" },
      { "name": "H2", "size": "28px", "lineHeight": "1.3", "weight": "600", "usage": "Section headers" },
      { "name": "H3", "size": "22px", "lineHeight": "1.4", "weight": "600", "usage": "Subsection headers" },
      { "name": "Body Large", "size": "18px", "lineHeight": "1.6", "weight": "400", "usage": "Lead paragraphs" },
      { "name": "Body", "size": "16px", "lineHeight": "1.6", "weight": "400", "usage": "Default body text" },
      { "name": "Small", "size": "14px", "lineHeight": "1.5", "weight": "400", "usage": "Captions, labels" },
      { "name": "Tiny", "size": "12px", "lineHeight": "1.4", "weight": "500", "usage": "Legal, footnotes" }
    ]
  },
  "spacing": {
    "baseUnit": 8,
    "scale": [
      { "name": "xs", "value": "4px" },
      { "name": "sm", "value": "8px" },
      { "name": "md", "value": "16px" },
      { "name": "lg", "value": "24px" },
      { "name": "xl", "value": "32px" },
      { "name": "2xl", "value": "48px" },
      { "name": "3xl", "value": "64px" }
    ],
    "borderRadius": [
      { "name": "sm", "value": "4px" },
      { "name": "md", "value": "8px" },
      { "name": "lg", "value": "16px" },
      { "name": "full", "value": "9999px" }
    ],
    "shadows": [
      { "name": "sm", "value": "0 1px 2px rgba(0,0,0,0.05)", "usage": "Subtle elevation" },
      { "name": "md", "value": "0 4px 12px rgba(0,0,0,0.1)", "usage": "Cards, dropdowns" },
      { "name": "lg", "value": "0 8px 24px rgba(0,0,0,0.15)", "usage": "Modals, popovers" }
    ]
  },
  "logoGuidelines": {
    "description": "string — describe the ideal logo concept",
    "clearSpaceRule": "string — e.g. 'Maintain clear space equal to the height of the logomark on all sides'",
    "minimumSize": "string — e.g. '24px height for digital, 10mm for print'",
    "donts": ["string — list of 4-5 things NOT to do with the logo"]
  },
  "brandVoice": {
    "personality": "string — 1-2 sentence voice description",
    "toneAttributes": ["string — list of 4-5 tone words"],
    "dos": ["string — 4-5 writing guidelines to follow"],
    "donts": ["string — 4-5 writing mistakes to avoid"],
    "sampleHeadline": "string — example headline in brand voice",
    "sampleBodyCopy": "string — example paragraph in brand voice"
  }
}"##;

/// Generate a complete design system for the given brand brief.
pub async fn generate_design_system(
    state: &SharedState,
    brief: BrandBrief,
) -> Result<DesignSystem, ServiceError> {
    let client = state.gemini().ok_or(ServiceError::Degraded)?;

    let prompt = build_prompt(&brief);
    debug!(
        company = %brief.company_name,
        model = %client.model(),
        prompt_len = prompt.len(),
        "sending generation prompt"
    );

    let text = client.generate_json(&prompt).await?;
    let mut system: DesignSystem =
        decode_fenced_json(&text).map_err(ServiceError::UpstreamPayload)?;

    // The model never sees the uploaded logo; carry it through verbatim.
    system.generated_logo_url = brief.logo;
    system.generated_at = Some(format_system_time(SystemTime::now()));

    info!(
        company = %brief.company_name,
        brand = %system.brand_name,
        "design system generated"
    );
    Ok(system)
}

/// Map the 0-100 density slider onto its three descriptor bands.
fn density_descriptor(density: u8) -> &'static str {
    if density < 33 {
        "minimal and airy — generous whitespace, few elements, breathing room"
    } else if density < 66 {
        "balanced — moderate density, well-structured layouts"
    } else {
        "rich and detailed — dense information, many visual elements, layered"
    }
}

/// Color guidance section: harmony options when the user chose a primary.
fn color_guidance(brief: &BrandBrief) -> String {
    match &brief.primary_color {
        Some(primary) => format!(
            "PRIMARY COLOR (user-chosen): {primary}\n\n{}",
            format_harmony_options_for_prompt(primary)
        ),
        None => "PRIMARY COLOR: Choose one that fits the brand perfectly.".to_string(),
    }
}

/// Assemble the full generation prompt with the embedded JSON contract.
fn build_prompt(brief: &BrandBrief) -> String {
    format!(
        "You are an expert brand designer and design systems architect. Generate a comprehensive \
         design system for a company with these specifications:\n\n\
         COMPANY: \"{company}\"\n\
         INDUSTRY: {industry}\n\
         BRAND ADJECTIVES: {adjectives}\n\
         TARGET AUDIENCE: {audience}\n\
         COLOR MOOD: {mood}\n\
         TYPOGRAPHY STYLE PREFERENCE: {typography}\n\
         DESIGN DENSITY: {density}\n\
         {colors}\n\n\
         Generate a COMPLETE design system as a JSON object with this EXACT structure. Be specific \
         with actual values — real hex codes, real font names from Google Fonts, real pixel values. \
         Every color should be carefully chosen for harmony and WCAG compliance.\n\n\
         {contract}\n\n\
         IMPORTANT: Provide 5 neutrals (from lightest to darkest). Make all colors harmonious with \
         the chosen mood. Use ONLY real Google Fonts names. Return ONLY the JSON, no markdown \
         fences or extra text.",
        company = brief.company_name,
        industry = brief.industry,
        adjectives = brief.adjectives.join(", "),
        audience = brief.target_audience,
        mood = brief.color_mood,
        typography = brief.typography_style,
        density = density_descriptor(brief.design_density),
        colors = color_guidance(brief),
        contract = RESPONSE_CONTRACT,
    )
}
