//! Harmony palette and semantic color derivation from a single seed color.
//!
//! Classical hue-rotation rules in HSL space: the seed is carried through
//! verbatim as `primary` while `secondary` and `accent` are rotations with a
//! lighter desaturated and a darker saturated tone profile respectively.

use std::fmt::Write;

use super::{Hsl, hex_to_hsl, hsl_to_hex, normalize_hue};

/// Role + hex pair inside a harmony palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteColor {
    /// Palette role: `primary`, `secondary` or `accent`.
    pub role: &'static str,
    /// Lowercase `#rrggbb` color, except the verbatim seed for `primary`.
    pub hex: String,
}

/// A named palette of exactly three roles derived from one seed color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarmonyPalette {
    /// Harmony rule the palette was derived with.
    pub name: &'static str,
    /// The `primary`/`secondary`/`accent` swatches, in that order.
    pub colors: Vec<PaletteColor>,
}

/// Three candidate colors per semantic category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticSuggestions {
    /// Green-family candidates.
    pub success: [String; 3],
    /// Amber/gold-family candidates.
    pub warning: [String; 3],
    /// Red-family candidates.
    pub error: [String; 3],
    /// Blue-family candidates.
    pub info: [String; 3],
}

/// Derive the five classical harmony palettes from a primary color.
pub fn generate_harmonies(primary_hex: &str) -> Vec<HarmonyPalette> {
    let Hsl { h, s, l } = hex_to_hsl(primary_hex);

    // Tone profiles for the derived roles: secondary lighter and slightly
    // desaturated, accent darker and slightly more saturated.
    let sec_s = (s - 10).max(20);
    let sec_l = (l + 10).min(85);
    let acc_s = (s + 10).min(100);
    let acc_l = (l - 5).max(25);

    let palette = |name, sec_offset: i32, acc_offset: i32, acc_l: i32| HarmonyPalette {
        name,
        colors: vec![
            PaletteColor {
                role: "primary",
                hex: primary_hex.to_string(),
            },
            PaletteColor {
                role: "secondary",
                hex: hsl_to_hex(
                    f64::from(normalize_hue(h + sec_offset)),
                    f64::from(sec_s),
                    f64::from(sec_l),
                ),
            },
            PaletteColor {
                role: "accent",
                hex: hsl_to_hex(
                    f64::from(normalize_hue(h + acc_offset)),
                    f64::from(acc_s),
                    f64::from(acc_l),
                ),
            },
        ],
    };

    vec![
        palette("Complementary", 180, 180, acc_l),
        palette("Analogous", 30, -30, acc_l),
        palette("Triadic", 120, 240, acc_l),
        palette("Split-Complementary", 150, 210, acc_l),
        palette("Tetradic", 90, 180, (acc_l + 10).min(80)),
    ]
}

/// Offer three fixed-hue candidates per semantic category, toned to the
/// primary's saturation and lightness.
pub fn generate_semantic_suggestions(primary_hex: &str) -> SemanticSuggestions {
    let Hsl { s, l, .. } = hex_to_hsl(primary_hex);

    // Match the energy of the primary without leaving the readable band.
    let sem_s = f64::from(s.clamp(35, 75));
    let sem_l = f64::from(l.clamp(35, 55));

    SemanticSuggestions {
        success: [
            hsl_to_hex(145.0, sem_s, sem_l),
            hsl_to_hex(155.0, sem_s, sem_l + 5.0),
            hsl_to_hex(135.0, sem_s - 5.0, sem_l + 5.0),
        ],
        warning: [
            hsl_to_hex(40.0, sem_s + 10.0, sem_l + 10.0),
            hsl_to_hex(35.0, sem_s + 5.0, sem_l + 15.0),
            hsl_to_hex(45.0, sem_s, sem_l + 5.0),
        ],
        error: [
            hsl_to_hex(0.0, sem_s + 5.0, sem_l + 5.0),
            hsl_to_hex(355.0, sem_s, sem_l),
            hsl_to_hex(10.0, sem_s + 5.0, sem_l + 5.0),
        ],
        info: [
            hsl_to_hex(210.0, sem_s, sem_l + 5.0),
            hsl_to_hex(200.0, sem_s - 5.0, sem_l + 10.0),
            hsl_to_hex(220.0, sem_s, sem_l),
        ],
    }
}

/// Render the palette and semantic options as the text block embedded in the
/// downstream generation prompt.
pub fn format_harmony_options_for_prompt(primary_hex: &str) -> String {
    let harmonies = generate_harmonies(primary_hex);
    let semantics = generate_semantic_suggestions(primary_hex);

    let mut output = String::from(
        "PRE-GENERATED HARMONIOUS PALETTE OPTIONS (choose the best option for the brand):\n\n",
    );

    for palette in &harmonies {
        let roles = palette
            .colors
            .iter()
            .map(|color| format!("{}={}", color.role, color.hex))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(output, "{}: {roles}", palette.name);
    }

    let _ = write!(
        output,
        "\nPRE-GENERATED SEMANTIC COLOR OPTIONS (choose ONE from each row):\n\
         Success options: {}\n\
         Warning options: {}\n\
         Error options: {}\n\
         Info options: {}\n\n\
         You MUST use the provided primary color {primary_hex} as-is. \
         For secondary and accent, choose from one of the palette options above. \
         For semantic colors, choose from the options above. \
         You may adjust lightness ±5% if needed for contrast.",
        semantics.success.join(", "),
        semantics.warning.join(", "),
        semantics.error.join(", "),
        semantics.info.join(", "),
    );

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_palettes_of_three_colors() {
        let harmonies = generate_harmonies("#6AABDB");
        assert_eq!(harmonies.len(), 5);
        let names: Vec<&str> = harmonies.iter().map(|palette| palette.name).collect();
        assert_eq!(
            names,
            [
                "Complementary",
                "Analogous",
                "Triadic",
                "Split-Complementary",
                "Tetradic"
            ]
        );
        for palette in &harmonies {
            assert_eq!(palette.colors.len(), 3);
            assert_eq!(palette.colors[0].role, "primary");
            assert_eq!(palette.colors[1].role, "secondary");
            assert_eq!(palette.colors[2].role, "accent");
        }
    }

    #[test]
    fn primary_is_preserved_verbatim() {
        for palette in generate_harmonies("#FF0000") {
            assert_eq!(palette.colors[0].hex, "#FF0000");
        }
    }

    #[test]
    fn complementary_of_red_lands_on_cyan() {
        let harmonies = generate_harmonies("#FF0000");
        let complementary = &harmonies[0];
        assert_eq!(complementary.colors[1].hex, "#3df5f5");
        assert_eq!(complementary.colors[2].hex, "#00e6e6");
        assert_eq!(hex_to_hsl(&complementary.colors[1].hex).h, 180);
        assert_eq!(hex_to_hsl(&complementary.colors[2].hex).h, 180);
    }

    #[test]
    fn analogous_rotates_both_ways() {
        let harmonies = generate_harmonies("#FF0000");
        let analogous = &harmonies[1];
        assert_eq!(hex_to_hsl(&analogous.colors[1].hex).h, 30);
        assert_eq!(hex_to_hsl(&analogous.colors[2].hex).h, 330);
    }

    #[test]
    fn tetradic_accent_gets_lighter_override() {
        let harmonies = generate_harmonies("#FF0000");
        let tetradic = &harmonies[4];
        let accent = hex_to_hsl(&tetradic.colors[2].hex);
        // Seed lightness 50 gives an accent tone of 45, lifted to 55 here.
        assert_eq!(accent.l, 55);
        assert_eq!(accent.h, 180);
    }

    #[test]
    fn semantic_categories_offer_three_candidates_each() {
        let semantics = generate_semantic_suggestions("#6AABDB");
        for candidates in [
            &semantics.success,
            &semantics.warning,
            &semantics.error,
            &semantics.info,
        ] {
            assert_eq!(candidates.len(), 3);
            for hex in candidates {
                assert_eq!(hex.len(), 7);
                assert!(hex.starts_with('#'));
            }
        }
    }

    #[test]
    fn semantic_hues_stay_in_their_families() {
        let semantics = generate_semantic_suggestions("#6AABDB");
        assert_eq!(hex_to_hsl(&semantics.success[0]).h, 145);
        assert_eq!(hex_to_hsl(&semantics.error[0]).h, 0);
        assert_eq!(hex_to_hsl(&semantics.info[0]).h, 210);
    }

    #[test]
    fn suggestions_are_deterministic() {
        assert_eq!(
            generate_semantic_suggestions("#6AABDB"),
            generate_semantic_suggestions("#6AABDB")
        );
        assert_eq!(generate_harmonies("#6AABDB"), generate_harmonies("#6AABDB"));
    }

    #[test]
    fn malformed_seed_still_yields_full_output() {
        let harmonies = generate_harmonies("not-a-color");
        assert_eq!(harmonies.len(), 5);
        // The seed falls back to black; derived roles are still valid hex.
        assert!(hex_to_hsl(&harmonies[0].colors[1].hex).s > 0);
        let semantics = generate_semantic_suggestions("not-a-color");
        assert_eq!(semantics.success.len(), 3);
    }

    #[test]
    fn prompt_block_lists_palettes_and_rules() {
        let block = format_harmony_options_for_prompt("#FF0000");
        assert!(block.starts_with("PRE-GENERATED HARMONIOUS PALETTE OPTIONS"));
        assert!(block.contains("Complementary: primary=#FF0000, secondary=#3df5f5, accent=#00e6e6"));
        assert!(block.contains("PRE-GENERATED SEMANTIC COLOR OPTIONS (choose ONE from each row):"));
        assert!(block.contains("Success options: "));
        assert!(block.contains("You MUST use the provided primary color #FF0000 as-is."));
        assert!(block.contains("±5%"));
    }
}
