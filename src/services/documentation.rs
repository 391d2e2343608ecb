//! OpenAPI documentation aggregation.

use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Brandforge Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::generate::generate_design_system,
        crate::routes::fonts::font_faces,
        crate::routes::palette::palette_options,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::brand::BrandBrief,
            crate::dto::design_system::ColorSwatch,
            crate::dto::design_system::SemanticColors,
            crate::dto::design_system::BrandColors,
            crate::dto::design_system::TypeScaleEntry,
            crate::dto::design_system::TypographySpec,
            crate::dto::design_system::NamedValue,
            crate::dto::design_system::ShadowSpec,
            crate::dto::design_system::SpacingSpec,
            crate::dto::design_system::LogoGuidelines,
            crate::dto::design_system::BrandVoice,
            crate::dto::design_system::DesignSystem,
            crate::dto::fonts::FontFacesResponse,
            crate::dto::palette::InkColor,
            crate::dto::palette::SwatchAnnotation,
            crate::dto::palette::AnnotatedPalette,
            crate::dto::palette::AnnotatedSemantics,
            crate::dto::palette::PaletteOptionsResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "generation", description = "Design-system generation"),
        (name = "fonts", description = "Google Fonts face resolution"),
        (name = "palettes", description = "Color-harmony palette previews"),
    )
)]
pub struct ApiDoc;
