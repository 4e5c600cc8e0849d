//! Optional JSON sidecar for API-style consumption.
//!
//! When `--json-output` is given, the same aggregated article list that
//! feeds the HTML renderer is serialized as one JSON document alongside a
//! generation timestamp and count, overwritten on every run.

use crate::models::Article;
use serde::Serialize;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

#[derive(Debug, Serialize)]
struct PageExport<'a> {
    generated_at: &'a str,
    count: usize,
    articles: &'a [Article],
}

/// Serialize the article list to `path`.
#[instrument(level = "info", skip_all, fields(path = %path, count = articles.len()))]
pub async fn write_articles(
    articles: &[Article],
    generated_at: &str,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let export = PageExport {
        generated_at,
        count: articles.len(),
        articles,
    };
    let json = serde_json::to_string(&export)?;
    fs::write(path, json).await?;
    info!("Wrote JSON sidecar");
    Ok(())
}
