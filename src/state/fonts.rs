//! Explicit per-process cache of resolved font faces.

use dashmap::DashMap;

use crate::dao::google_fonts::FontAssets;

/// Memo of families already resolved, preventing duplicate upstream fetches.
///
/// Owned by [`AppState`](super::AppState) and scoped to the process
/// lifetime; never ambient global state.
#[derive(Default)]
pub struct FontCache {
    faces: DashMap<String, FontAssets>,
}

impl FontCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached faces for `family`, if resolved before.
    pub fn get(&self, family: &str) -> Option<FontAssets> {
        self.faces.get(family).map(|entry| entry.value().clone())
    }

    /// Remember the resolved faces for `family`.
    pub fn insert(&self, family: &str, assets: FontAssets) {
        self.faces.insert(family.to_string(), assets);
    }

    /// Number of families currently cached.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caches_per_family() {
        let cache = FontCache::new();
        assert!(cache.is_empty());
        assert!(cache.get("Inter").is_none());

        cache.insert(
            "Inter",
            FontAssets {
                regular_url: "https://fonts.gstatic.com/r.ttf".into(),
                bold_url: "https://fonts.gstatic.com/b.ttf".into(),
            },
        );

        assert_eq!(cache.len(), 1);
        let assets = cache.get("Inter").unwrap();
        assert_eq!(assets.regular_url, "https://fonts.gstatic.com/r.ttf");
        assert!(cache.get("Lora").is_none());
    }
}
