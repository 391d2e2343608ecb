//! Server-side palette derivation and legibility annotation.

use crate::{
    color::harmony::{generate_harmonies, generate_semantic_suggestions},
    dto::{
        palette::{AnnotatedPalette, AnnotatedSemantics, PaletteOptionsResponse},
        validation::validate_hex_color,
    },
    error::ServiceError,
};

/// Derive annotated harmony palettes and semantic options from a seed color.
///
/// The engine itself never fails on malformed input; the route contract is
/// stricter and rejects anything that is not `#RRGGBB`.
pub fn palette_options(primary: &str) -> Result<PaletteOptionsResponse, ServiceError> {
    validate_hex_color(primary)
        .map_err(|err| ServiceError::InvalidInput(format!("invalid primary color: {err}")))?;

    let harmonies = generate_harmonies(primary)
        .into_iter()
        .map(AnnotatedPalette::from)
        .collect();
    let semantic = AnnotatedSemantics::from(generate_semantic_suggestions(primary));

    Ok(PaletteOptionsResponse {
        primary: primary.to_string(),
        harmonies,
        semantic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotates_all_palettes_and_categories() {
        let response = palette_options("#6AABDB").unwrap();
        assert_eq!(response.primary, "#6AABDB");
        assert_eq!(response.harmonies.len(), 5);
        for palette in &response.harmonies {
            assert_eq!(palette.colors.len(), 3);
        }
        assert_eq!(response.semantic.success.len(), 3);
        assert_eq!(response.semantic.warning.len(), 3);
        assert_eq!(response.semantic.error.len(), 3);
        assert_eq!(response.semantic.info.len(), 3);
    }

    #[test]
    fn primary_swatch_carries_the_seed_verbatim() {
        let response = palette_options("#FF0000").unwrap();
        for palette in &response.harmonies {
            assert_eq!(palette.colors[0].hex, "#FF0000");
        }
    }

    #[test]
    fn rejects_malformed_seed() {
        assert!(palette_options("red").is_err());
        assert!(palette_options("#12345").is_err());
    }
}
