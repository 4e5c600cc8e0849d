//! Feed fetching and entry normalization.
//!
//! One fetch per source: download the feed with a browser-like User-Agent,
//! parse it with `feed-rs`, and normalize at most the first `max_entries`
//! entries into [`Article`]s. Anything that goes wrong for a single source
//! (network error, bad status, unparseable XML) is logged and the source
//! simply contributes nothing — sibling fetches are never affected.
//!
//! [`fetch_all`] fans the per-source fetches out on a bounded concurrent
//! stream and flattens the results; ordering across sources is imposed
//! later by the aggregator, not here.

use crate::image;
use crate::models::{Article, Source};
use crate::text;
use crate::timefmt;
use feed_rs::model::{Entry, Feed};
use futures::stream::{self, StreamExt};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Identification string sent with every feed request. Some of the
/// configured feeds reject clients that look like bots.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Per-run normalization policy.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Maximum entries taken per feed, in feed order.
    pub max_entries: usize,
    /// Drop entries that resolve to no usable image.
    pub require_image: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_entries: 8,
            require_image: false,
        }
    }
}

/// Build the shared HTTP client with the browser-like identification
/// string and a fixed per-request timeout.
pub fn build_client(timeout_secs: u64) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

/// Fetch every source concurrently and merge the results.
///
/// The fan-out is bounded by `concurrency`; a failed source contributes an
/// empty list and never cancels or blocks the others.
#[instrument(level = "info", skip_all, fields(sources = sources.len(), concurrency = concurrency))]
pub async fn fetch_all(
    client: &reqwest::Client,
    sources: &[Source],
    opts: &FetchOptions,
    concurrency: usize,
) -> Vec<Article> {
    let per_source: Vec<Vec<Article>> = stream::iter(sources)
        .map(|source| fetch_source(client, source, opts))
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    let merged: Vec<Article> = per_source.into_iter().flatten().collect();
    info!(count = merged.len(), "Merged articles from all sources");
    merged
}

/// Fetch and normalize a single source.
///
/// Failures are absorbed here: the error is logged and an empty list is
/// returned, so callers never see a per-source error.
#[instrument(level = "info", skip_all, fields(source = %source.id))]
pub async fn fetch_source(
    client: &reqwest::Client,
    source: &Source,
    opts: &FetchOptions,
) -> Vec<Article> {
    match try_fetch_source(client, source, opts).await {
        Ok(articles) => {
            info!(count = articles.len(), "Fetched feed");
            articles
        }
        Err(e) => {
            error!(error = %e, url = %source.url, "Feed fetch failed; source contributes no articles");
            Vec::new()
        }
    }
}

async fn try_fetch_source(
    client: &reqwest::Client,
    source: &Source,
    opts: &FetchOptions,
) -> Result<Vec<Article>, Box<dyn Error>> {
    let bytes = client
        .get(&source.url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    let feed = feed_rs::parser::parse(&bytes[..])?;
    Ok(normalize_entries(&feed, source, opts))
}

/// Normalize the first `max_entries` entries of a parsed feed.
///
/// Entries lacking a title or link are skipped; with `require_image` set,
/// entries resolving to no image are skipped too. A feed with zero entries
/// yields an empty list, which is not an error.
pub fn normalize_entries(feed: &Feed, source: &Source, opts: &FetchOptions) -> Vec<Article> {
    feed.entries
        .iter()
        .take(opts.max_entries)
        .filter_map(|entry| normalize_entry(entry, source, opts))
        .collect()
}

/// Normalize one feed entry, or `None` when it cannot become an article.
fn normalize_entry(entry: &Entry, source: &Source, opts: &FetchOptions) -> Option<Article> {
    let title = entry
        .title
        .as_ref()
        .map(|t| t.content.trim().to_string())
        .filter(|t| !t.is_empty())?;
    let link = entry
        .links
        .first()
        .map(|l| l.href.clone())
        .filter(|l| !l.is_empty())?;

    // First-available body: full content, else summary (feed-rs folds the
    // RSS <description> into `summary`).
    let body_html = entry
        .content
        .as_ref()
        .and_then(|c| c.body.as_deref())
        .or_else(|| entry.summary.as_ref().map(|s| s.content.as_str()))
        .unwrap_or("");

    let image = image::extract_image(body_html).and_then(|raw| image::proxy_url(&raw));
    if image.is_none() && opts.require_image {
        debug!(%title, "Skipping imageless entry");
        return None;
    }

    let (timestamp, date) = timefmt::normalize(entry.published, entry.updated);
    let plain = text::clean_html(body_html);

    Some(Article {
        title,
        link,
        source_name: source.name.clone(),
        source_id: source.id.clone(),
        date,
        timestamp,
        image,
        summary: text::truncate_chars(&plain, text::SUMMARY_CHARS),
        body: text::truncate_chars(&plain, text::EXTRACT_CHARS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_source() -> Source {
        Source {
            id: "fixture".to_string(),
            name: "Fixture Feed".to_string(),
            url: "https://fixture.example/rss".to_string(),
            color: None,
        }
    }

    fn parse_fixture(xml: &str) -> Feed {
        feed_rs::parser::parse(xml.as_bytes()).unwrap()
    }

    const RSS_FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
<channel>
<title>Fixture</title>
<link>https://fixture.example</link>
<description>fixture channel</description>
<item>
<title>First story</title>
<link>https://fixture.example/1</link>
<description>&lt;p&gt;Story one text.&lt;/p&gt;&lt;img src="https://img.example/one.jpg"/&gt;</description>
<pubDate>Wed, 01 Jan 2025 12:00:00 GMT</pubDate>
</item>
<item>
<title>Second story</title>
<link>https://fixture.example/2</link>
<description>Plain text only, no image here.</description>
<pubDate>Wed, 01 Jan 2025 11:00:00 GMT</pubDate>
</item>
<item>
<link>https://fixture.example/3</link>
<description>Entry without a title is skipped.</description>
</item>
</channel>
</rss>"#;

    #[test]
    fn test_normalize_entries_from_rss() {
        let feed = parse_fixture(RSS_FIXTURE);
        let articles = normalize_entries(&feed, &test_source(), &FetchOptions::default());

        // Titleless third item is skipped.
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "First story");
        assert_eq!(articles[0].link, "https://fixture.example/1");
        assert_eq!(articles[0].source_id, "fixture");
        assert!(articles[0].image.as_deref().unwrap().contains("wsrv.nl"));
        assert!(
            articles[0]
                .image
                .as_deref()
                .unwrap()
                .contains(&urlencoding::encode("https://img.example/one.jpg").into_owned())
        );
        assert_eq!(articles[0].summary, "Story one text.");
        assert!(articles[1].image.is_none());
    }

    #[test]
    fn test_pubdate_becomes_sortable_timestamp() {
        let feed = parse_fixture(RSS_FIXTURE);
        let articles = normalize_entries(&feed, &test_source(), &FetchOptions::default());
        // 2025-01-01T12:00:00Z
        assert_eq!(articles[0].timestamp, 1735732800);
        assert!(articles[0].timestamp > articles[1].timestamp);
        // UTC+8 display
        assert_eq!(articles[0].date, "01-01 20:00");
    }

    #[test]
    fn test_max_entries_caps_feed_order() {
        let feed = parse_fixture(RSS_FIXTURE);
        let opts = FetchOptions {
            max_entries: 1,
            require_image: false,
        };
        let articles = normalize_entries(&feed, &test_source(), &opts);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "First story");
    }

    #[test]
    fn test_require_image_drops_imageless_entries() {
        let feed = parse_fixture(RSS_FIXTURE);
        let opts = FetchOptions {
            max_entries: 8,
            require_image: true,
        };
        let articles = normalize_entries(&feed, &test_source(), &opts);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "First story");
    }

    #[test]
    fn test_content_encoded_preferred_over_description() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
<channel>
<title>Fixture</title>
<link>https://fixture.example</link>
<description>fixture</description>
<item>
<title>Rich story</title>
<link>https://fixture.example/rich</link>
<description>summary text without image</description>
<content:encoded><![CDATA[<p>Full body.</p><img data-src="https://img.example/full.jpg">]]></content:encoded>
</item>
</channel>
</rss>"#;
        let feed = parse_fixture(xml);
        let articles = normalize_entries(&feed, &test_source(), &FetchOptions::default());
        assert_eq!(articles.len(), 1);
        assert!(
            articles[0]
                .image
                .as_deref()
                .unwrap()
                .contains(&urlencoding::encode("https://img.example/full.jpg").into_owned())
        );
        assert_eq!(articles[0].summary, "Full body.");
    }

    #[test]
    fn test_entry_without_times_gets_fallback_display() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
<title>Fixture</title>
<link>https://fixture.example</link>
<description>fixture</description>
<item>
<title>Timeless</title>
<link>https://fixture.example/t</link>
<description>no dates at all</description>
</item>
</channel>
</rss>"#;
        let feed = parse_fixture(xml);
        let before = chrono::Utc::now().timestamp();
        let articles = normalize_entries(&feed, &test_source(), &FetchOptions::default());
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].date, crate::timefmt::FALLBACK_DISPLAY);
        assert!(articles[0].timestamp >= before);
    }

    #[tokio::test]
    async fn test_fetch_source_absorbs_request_failure() {
        let client = build_client(5).unwrap();
        let source = Source {
            id: "broken".to_string(),
            name: "Broken".to_string(),
            url: "not a valid url at all".to_string(),
            color: None,
        };
        let articles = fetch_source(&client, &source, &FetchOptions::default()).await;
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_with_only_failing_sources_is_empty() {
        let client = build_client(5).unwrap();
        let sources = vec![
            Source {
                id: "bad1".to_string(),
                name: "Bad 1".to_string(),
                url: "::definitely-not-a-url::".to_string(),
                color: None,
            },
            Source {
                id: "bad2".to_string(),
                name: "Bad 2".to_string(),
                url: "also not a url".to_string(),
                color: None,
            },
        ];
        let merged = fetch_all(&client, &sources, &FetchOptions::default(), 4).await;
        assert!(merged.is_empty());
    }
}
