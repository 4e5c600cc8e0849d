//! Data models for feed sources and normalized articles.
//!
//! This module defines the two records that flow through the pipeline:
//! - [`Source`]: one configured RSS/Atom feed endpoint
//! - [`Article`]: the normalized, render-ready record derived from one feed entry
//!
//! Sources are loaded once at startup and immutable for the run. Articles are
//! created during fetching, aggregated, rendered, and discarded — nothing is
//! persisted beyond the generated output files.

use serde::{Deserialize, Serialize};

/// One configured feed endpoint.
///
/// The source list is either the built-in default set (see
/// [`crate::sources::default_sources`]) or loaded from a YAML file passed on
/// the command line. Either way it is fixed for the duration of the run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Source {
    /// Unique short token identifying the source (used for tab filtering).
    pub id: String,
    /// Human-readable display name shown on cards and tabs.
    pub name: String,
    /// The feed URL to fetch.
    pub url: String,
    /// Optional accent color for the source tab (CSS color string).
    #[serde(default)]
    pub color: Option<String>,
}

/// A normalized article ready for aggregation and rendering.
///
/// Every `Article` handed to the aggregator has a non-empty title and link.
/// `image` is `None` only when the run permits imageless articles; with
/// `--require-image` such entries are dropped during fetching instead.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    /// The entry title.
    pub title: String,
    /// Absolute link to the original article.
    pub link: String,
    /// Display name of the source that published it.
    pub source_name: String,
    /// Identifier of the source, matching [`Source::id`].
    pub source_id: String,
    /// Display date string, already adjusted to the target timezone.
    pub date: String,
    /// Epoch seconds used only for sorting; comparable across sources.
    pub timestamp: i64,
    /// Proxied image URL, absent when no usable image was found.
    pub image: Option<String>,
    /// Short plain-text summary for the card view.
    pub summary: String,
    /// Longer plain-text extract reserved for downstream summarization.
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            title: "Test headline".to_string(),
            link: "https://example.com/a".to_string(),
            source_name: "Example".to_string(),
            source_id: "example".to_string(),
            date: "01-02 12:00".to_string(),
            timestamp: 1_700_000_000,
            image: Some("https://wsrv.nl/?url=x".to_string()),
            summary: "Short summary".to_string(),
            body: "Longer body".to_string(),
        }
    }

    #[test]
    fn test_source_yaml_deserialization() {
        let yaml = r##"
id: ithome
name: IT之家
url: https://www.ithome.com/rss/
color: "#d32f2f"
"##;
        let source: Source = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(source.id, "ithome");
        assert_eq!(source.name, "IT之家");
        assert_eq!(source.color.as_deref(), Some("#d32f2f"));
    }

    #[test]
    fn test_source_color_is_optional() {
        let yaml = "id: kr36\nname: 36Kr\nurl: https://36kr.com/feed\n";
        let source: Source = serde_yaml::from_str(yaml).unwrap();
        assert!(source.color.is_none());
    }

    #[test]
    fn test_article_json_serialization() {
        let json = serde_json::to_string(&sample_article()).unwrap();
        assert!(json.contains("Test headline"));
        assert!(json.contains("\"timestamp\":1700000000"));
        assert!(json.contains("wsrv.nl"));
    }

    #[test]
    fn test_article_null_image_serializes_as_null() {
        let mut article = sample_article();
        article.image = None;
        let json = serde_json::to_string(&article).unwrap();
        assert!(json.contains("\"image\":null"));
    }
}
