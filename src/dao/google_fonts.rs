//! Access layer for the Google Fonts stylesheet endpoint.
//!
//! Fetches `css2` with a legacy browser User-Agent so the service answers
//! with plain TTF sources instead of woff2, then extracts the download URL
//! for each requested weight.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::{Client, StatusCode, header::USER_AGENT};
use thiserror::Error;

/// User-Agent of an old Safari build; Google Fonts serves TTF URLs to it.
const LEGACY_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; U; Intel Mac OS X 10_6_8; de-at) \
     AppleWebKit/533.21.1 (KHTML, like Gecko) Version/5.0.5 Safari/533.21.1";

/// Matches the TTF source URL inside a `@font-face` block.
static TTF_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"url\((https://[^)]+\.ttf)\)").expect("static regex"));

/// Convenient result alias returning [`FontsError`] failures.
pub type FontsResult<T> = Result<T, FontsError>;

/// Failures that can occur while resolving font faces.
#[derive(Debug, Error)]
pub enum FontsError {
    /// Building the HTTP client failed.
    #[error("failed to build fonts client")]
    ClientBuilder {
        /// Underlying builder failure.
        #[source]
        source: reqwest::Error,
    },
    /// The stylesheet request could not be sent.
    #[error("failed to fetch stylesheet for family `{family}`")]
    RequestSend {
        /// Family being resolved.
        family: String,
        /// Underlying transport failure.
        #[source]
        source: reqwest::Error,
    },
    /// The stylesheet endpoint returned an unexpected status.
    #[error("unexpected stylesheet response status {status} for family `{family}`")]
    RequestStatus {
        /// Family being resolved.
        family: String,
        /// Status code received.
        status: StatusCode,
    },
    /// The stylesheet body could not be read.
    #[error("failed to read stylesheet body for family `{family}`")]
    ReadBody {
        /// Family being resolved.
        family: String,
        /// Underlying read failure.
        #[source]
        source: reqwest::Error,
    },
    /// No TTF faces were present in the stylesheet.
    #[error("no TTF faces found for family `{family}`")]
    NoFaces {
        /// Family being resolved.
        family: String,
    },
}

/// Resolved TTF download URLs for one font family.
///
/// A missing face is represented by an empty string, matching the wire
/// contract of the fonts route.
#[derive(Debug, Clone)]
pub struct FontAssets {
    /// Weight-400 face.
    pub regular_url: String,
    /// Weight-700 face.
    pub bold_url: String,
}

/// Client resolving Google Fonts families to TTF face URLs.
#[derive(Clone)]
pub struct FontsClient {
    client: Client,
    css_url: String,
}

impl FontsClient {
    /// Build a fonts client against the given `css2` endpoint.
    pub fn new(css_url: impl Into<String>) -> FontsResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| FontsError::ClientBuilder { source })?;
        Ok(Self {
            client,
            css_url: css_url.into(),
        })
    }

    /// Fetch and parse the faces for `family` at weights 400 and 700.
    pub async fn fetch_faces(&self, family: &str) -> FontsResult<FontAssets> {
        let url = format!(
            "{}?family={}:wght@400;700&display=swap",
            self.css_url,
            family.replace(' ', "+")
        );

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, LEGACY_USER_AGENT)
            .send()
            .await
            .map_err(|source| FontsError::RequestSend {
                family: family.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(FontsError::RequestStatus {
                family: family.to_string(),
                status: response.status(),
            });
        }

        let css = response
            .text()
            .await
            .map_err(|source| FontsError::ReadBody {
                family: family.to_string(),
                source,
            })?;

        parse_faces(&css).ok_or_else(|| FontsError::NoFaces {
            family: family.to_string(),
        })
    }
}

/// Walk the `@font-face` blocks and keep the first URL per weight class.
fn parse_faces(css: &str) -> Option<FontAssets> {
    let mut regular_url: Option<String> = None;
    let mut bold_url: Option<String> = None;

    for block in css.split("@font-face") {
        if block.trim().is_empty() {
            continue;
        }

        let Some(url) = TTF_URL.captures(block).map(|caps| caps[1].to_string()) else {
            continue;
        };

        if block.contains("font-weight: 700") {
            bold_url.get_or_insert(url);
        } else {
            regular_url.get_or_insert(url);
        }
    }

    if regular_url.is_none() && bold_url.is_none() {
        return None;
    }

    Some(FontAssets {
        regular_url: regular_url.unwrap_or_default(),
        bold_url: bold_url.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSS: &str = r"
/* latin */
@font-face {
  font-family: 'Inter';
  font-style: normal;
  font-weight: 400;
  src: url(https://fonts.gstatic.com/s/inter/v13/regular.ttf) format('truetype');
}
/* latin */
@font-face {
  font-family: 'Inter';
  font-style: normal;
  font-weight: 700;
  src: url(https://fonts.gstatic.com/s/inter/v13/bold.ttf) format('truetype');
}
";

    #[test]
    fn classifies_faces_by_weight() {
        let assets = parse_faces(SAMPLE_CSS).unwrap();
        assert_eq!(
            assets.regular_url,
            "https://fonts.gstatic.com/s/inter/v13/regular.ttf"
        );
        assert_eq!(
            assets.bold_url,
            "https://fonts.gstatic.com/s/inter/v13/bold.ttf"
        );
    }

    #[test]
    fn keeps_first_face_per_weight() {
        let css = format!("{SAMPLE_CSS}\n{SAMPLE_CSS}");
        let assets = parse_faces(&css).unwrap();
        assert_eq!(
            assets.regular_url,
            "https://fonts.gstatic.com/s/inter/v13/regular.ttf"
        );
    }

    #[test]
    fn missing_bold_face_yields_empty_url() {
        let css = "@font-face {\n  font-weight: 400;\n  src: url(https://fonts.gstatic.com/r.ttf);\n}";
        let assets = parse_faces(css).unwrap();
        assert_eq!(assets.regular_url, "https://fonts.gstatic.com/r.ttf");
        assert_eq!(assets.bold_url, "");
    }

    #[test]
    fn stylesheet_without_ttf_urls_is_rejected() {
        let css = "@font-face {\n  font-weight: 400;\n  src: url(https://fonts.gstatic.com/r.woff2);\n}";
        assert!(parse_faces(css).is_none());
        assert!(parse_faces("").is_none());
    }
}
