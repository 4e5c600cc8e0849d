//! The configured feed source list.
//!
//! The default set mirrors the six Chinese tech feeds the site has always
//! aggregated. A YAML file passed via `--sources` replaces the whole list,
//! which is how the tests (and anyone pointing the tool at different feeds)
//! inject their own sources without touching code.

use crate::models::Source;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// The built-in feed list used when no `--sources` file is given.
pub fn default_sources() -> Vec<Source> {
    let defaults = [
        ("ithome", "IT之家", "https://www.ithome.com/rss/", "#d32f2f"),
        ("kr36", "36Kr", "https://36kr.com/feed", "#4285f4"),
        ("solidot", "Solidot", "https://www.solidot.org/index.rss", "#0f9d58"),
        ("sspai", "少数派", "https://sspai.com/feed", "#da282a"),
        ("ifanr", "爱范儿", "https://www.ifanr.com/feed", "#f7b500"),
        ("williamlong", "月光博客", "https://www.williamlong.info/rss.xml", "#673ab7"),
    ];

    defaults
        .into_iter()
        .map(|(id, name, url, color)| Source {
            id: id.to_string(),
            name: name.to_string(),
            url: url.to_string(),
            color: Some(color.to_string()),
        })
        .collect()
}

/// Load the source list from a YAML file (a sequence of source mappings).
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as a list
/// of sources.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn load_sources(path: &str) -> Result<Vec<Source>, Box<dyn Error>> {
    let raw = fs::read_to_string(path).await?;
    let sources: Vec<Source> = serde_yaml::from_str(&raw)?;
    info!(count = sources.len(), "Loaded sources from file");
    Ok(sources)
}
