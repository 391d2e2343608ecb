//! Perceptual metrics: WCAG relative luminance, contrast ratios and
//! text-on-swatch legibility.

use super::parse_hex_channels;

/// WCAG AA minimum contrast ratio for normal-sized text.
pub const AA_NORMAL: f64 = 4.5;

/// Luminance threshold above which overlaid labels should use dark ink.
///
/// Intentionally below the 0.5 midpoint; tuned for saturated brand colors.
pub const LIGHT_INK_THRESHOLD: f64 = 0.179;

/// Relative luminance per WCAG 2.0.
///
/// Malformed hex yields `0.0`.
pub fn relative_luminance(hex: &str) -> f64 {
    let Some((r, g, b)) = parse_hex_channels(hex) else {
        return 0.0;
    };

    let linear = |channel: u8| {
        let v = f64::from(channel) / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };

    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// WCAG contrast ratio between two colors; symmetric and always `>= 1`.
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Whether two colors pass WCAG AA for normal text.
pub fn passes_aa(a: &str, b: &str) -> bool {
    contrast_ratio(a, b) >= AA_NORMAL
}

/// Whether overlaid labels on this color should render in dark ink.
pub fn is_light(hex: &str) -> bool {
    relative_luminance(hex) > LIGHT_INK_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_spans_black_to_white() {
        assert!((relative_luminance("#ffffff") - 1.0).abs() < 1e-9);
        assert!(relative_luminance("#000000").abs() < 1e-9);
        assert!((relative_luminance("#6AABDB") - 0.373).abs() < 0.01);
    }

    #[test]
    fn malformed_input_has_zero_luminance() {
        assert_eq!(relative_luminance("not-a-color"), 0.0);
        assert_eq!(relative_luminance(""), 0.0);
    }

    #[test]
    fn contrast_is_symmetric() {
        for (a, b) in [("#6AABDB", "#ffffff"), ("#123456", "#fedcba"), ("#ff0000", "#00ff00")] {
            assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        }
    }

    #[test]
    fn contrast_of_color_with_itself_is_one() {
        for hex in ["#6AABDB", "#000000", "#ffffff", "#808080"] {
            assert!((contrast_ratio(hex, hex) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn black_on_white_hits_maximum_contrast() {
        assert!((contrast_ratio("#000000", "#FFFFFF") - 21.0).abs() < 0.01);
    }

    #[test]
    fn aa_verdicts_for_brand_blue() {
        // White text on the brand blue is illegible; black text passes.
        let on_white = contrast_ratio("#FFFFFF", "#6AABDB");
        assert!(on_white > 2.4 && on_white < 2.6);
        assert!(!passes_aa("#FFFFFF", "#6AABDB"));

        let on_black = contrast_ratio("#000000", "#6AABDB");
        assert!(on_black > 8.0 && on_black < 9.0);
        assert!(passes_aa("#000000", "#6AABDB"));
    }

    #[test]
    fn lightness_classification() {
        assert!(is_light("#FFFFFF"));
        assert!(!is_light("#000000"));
        assert!(is_light("#6AABDB"));
        // Threshold sits below the midpoint, so mid grays count as light.
        assert!(is_light("#808080"));
    }
}
