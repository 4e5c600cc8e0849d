//! Sort and deduplicate the merged article list.
//!
//! The final page order is newest-first. Duplicate titles happen when two
//! sources syndicate the same story; only the first occurrence in sorted
//! order survives, so among duplicates the newest timestamp wins (ties fall
//! back to merge order, since the sort is stable).

use crate::models::Article;
use itertools::Itertools;
use std::cmp::Reverse;
use tracing::{debug, instrument};

/// Produce the final ordered, title-unique article list.
#[instrument(level = "info", skip_all, fields(input = articles.len()))]
pub fn aggregate(mut articles: Vec<Article>) -> Vec<Article> {
    articles.sort_by_key(|a| Reverse(a.timestamp));
    let before = articles.len();
    let deduped: Vec<Article> = articles
        .into_iter()
        .unique_by(|a| a.title.clone())
        .collect();
    if deduped.len() < before {
        debug!(removed = before - deduped.len(), "Dropped duplicate titles");
    }
    deduped
}
