/// OpenAPI documentation generation.
pub mod documentation;
/// Font face resolution with per-process caching.
pub mod font_service;
/// Design-system generation orchestration.
pub mod generation_service;
/// Health check service.
pub mod health_service;
/// Palette derivation and legibility annotation.
pub mod palette_service;
