//! Image extraction and proxy URL rewriting.
//!
//! Feed entry bodies are scanned for a representative image. Lazy-load
//! attributes are probed before `src` because several of the configured
//! feeds ship a placeholder in `src` and the real image in `data-src`.
//! Accepted URLs are rewritten through the wsrv.nl resize service so the
//! rendered page serves small webp thumbnails instead of full-size
//! originals.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

/// Attributes probed on each `<img>`, in priority order.
const IMG_ATTRS: &[&str] = &["data-src", "data-original", "data-lazy-src", "src"];

/// Substrings marking non-content imagery: emoji, avatars, tracking
/// pixels, share icons, site chrome.
const DENYLIST: &[&str] = &[
    "emoji",
    "smilies",
    "avatar",
    "gravatar",
    "logo",
    "icon",
    "pixel",
    "spacer",
    "beacon",
    "analytics",
    "tracker",
    "share",
    "button",
    "feedburner",
    "1x1",
    "loading.gif",
    "blank.gif",
];

/// Thumbnail geometry and encoding requested from the proxy.
const PROXY_WIDTH: u32 = 480;
const PROXY_HEIGHT: u32 = 270;
const PROXY_QUALITY: u32 = 75;

static IMG_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

/// Extract the first usable image URL from an HTML fragment.
///
/// Scans `<img>` elements in document order. For each element the
/// attributes in [`IMG_ATTRS`] are probed in priority order; the first
/// value that is an absolute http(s) URL and matches no denylist entry is
/// returned. An element whose candidates all fail does not stop the scan —
/// later elements are still considered.
///
/// Unparseable or empty fragments yield `None`, never an error.
pub fn extract_image(html: &str) -> Option<String> {
    if html.trim().is_empty() {
        return None;
    }

    let fragment = Html::parse_fragment(html);
    for element in fragment.select(&IMG_SELECTOR) {
        for attr in IMG_ATTRS {
            if let Some(value) = element.value().attr(attr) {
                let value = value.trim();
                if value.is_empty() {
                    continue;
                }
                if !is_absolute_http(value) {
                    continue;
                }
                if is_denylisted(value) {
                    debug!(url = value, "Skipping denylisted image");
                    continue;
                }
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Rewrite an image URL through the wsrv.nl resize service.
///
/// The original URL is percent-encoded into the query string together with
/// fixed width/height, crop-to-fill, webp output, and quality parameters.
/// Pure string transform; identical input always yields identical output.
/// Empty or non-http(s) input is rejected.
pub fn proxy_url(raw: &str) -> Option<String> {
    if raw.is_empty() || !is_absolute_http(raw) {
        return None;
    }
    Some(format!(
        "https://wsrv.nl/?url={}&w={}&h={}&fit=cover&output=webp&q={}",
        urlencoding::encode(raw),
        PROXY_WIDTH,
        PROXY_HEIGHT,
        PROXY_QUALITY
    ))
}

fn is_absolute_http(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

fn is_denylisted(url: &str) -> bool {
    let lower = url.to_lowercase();
    DENYLIST.iter().any(|pattern| lower.contains(pattern))
}
