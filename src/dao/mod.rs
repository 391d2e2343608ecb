//! Access layers for the upstream services the backend depends on.

/// Gemini generative-model REST access.
pub mod gemini;
/// Google Fonts stylesheet access.
pub mod google_fonts;
