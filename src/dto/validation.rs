//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates that a color is `#` followed by exactly six hex digits.
///
/// # Examples
///
/// ```ignore
/// validate_hex_color("#6aabdb") // Ok
/// validate_hex_color("6aabdb")  // Err - missing '#'
/// validate_hex_color("#6aabd")  // Err - too short
/// ```
pub fn validate_hex_color(hex: &str) -> Result<(), ValidationError> {
    let Some(digits) = hex.strip_prefix('#') else {
        let mut err = ValidationError::new("hex_color_prefix");
        err.message = Some("Color must start with '#'".into());
        return Err(err);
    };

    if digits.len() != 6 {
        let mut err = ValidationError::new("hex_color_length");
        err.message = Some(
            format!("Color must have exactly 6 hex digits (got {})", digits.len()).into(),
        );
        return Err(err);
    }

    if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        let mut err = ValidationError::new("hex_color_format");
        err.message = Some("Color must contain only hexadecimal digits".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_hex_color_valid() {
        assert!(validate_hex_color("#6aabdb").is_ok());
        assert!(validate_hex_color("#6AABDB").is_ok());
        assert!(validate_hex_color("#000000").is_ok());
        assert!(validate_hex_color("#FFFFFF").is_ok());
    }

    #[test]
    fn test_validate_hex_color_missing_prefix() {
        assert!(validate_hex_color("6aabdb").is_err());
        assert!(validate_hex_color("").is_err());
    }

    #[test]
    fn test_validate_hex_color_invalid_length() {
        assert!(validate_hex_color("#6aabd").is_err()); // too short
        assert!(validate_hex_color("#6aabdbb").is_err()); // too long
        assert!(validate_hex_color("#").is_err()); // empty digits
    }

    #[test]
    fn test_validate_hex_color_invalid_format() {
        assert!(validate_hex_color("#6aabdg").is_err()); // invalid hex
        assert!(validate_hex_color("#6aab d").is_err()); // space
    }
}
