//! # Tech Frontpage
//!
//! A single-shot news aggregation pipeline that fetches a fixed list of
//! RSS/Atom feeds, normalizes each entry (image extraction and CDN proxy
//! rewrite, HTML-to-text summaries, timestamp normalization), aggregates
//! the results, and renders one self-contained HTML page.
//!
//! ## Usage
//!
//! ```sh
//! tech_frontpage -o index.html --json-output articles.json
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Fetching**: one feed retrieval per source, fanned out concurrently
//! 2. **Normalization**: per-entry image/text/timestamp transforms
//! 3. **Aggregation**: sort newest-first, deduplicate by title
//! 4. **Output**: write the HTML page (and optional JSON sidecar)
//!
//! No failure short of an unwritable output path is fatal: a source that
//! errors or times out simply contributes nothing to this run.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregate;
mod cli;
mod fetch;
mod image;
mod models;
mod outputs;
mod sources;
mod text;
mod timefmt;

use cli::Cli;
use fetch::FetchOptions;
use outputs::{html, json};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("tech_frontpage starting up");

    let args = Cli::parse();
    debug!(?args.output, ?args.sources, args.max_entries, args.concurrency, "Parsed CLI arguments");

    // ---- Source list ----
    let source_list = match &args.sources {
        Some(path) => sources::load_sources(path).await?,
        None => sources::default_sources(),
    };
    if source_list.is_empty() {
        warn!("Source list is empty; the page will have zero articles");
    }
    info!(count = source_list.len(), "Source list ready");

    // ---- Fetch all feeds concurrently ----
    let client = fetch::build_client(args.timeout_secs)?;
    let opts = FetchOptions {
        max_entries: args.max_entries,
        require_image: args.require_image,
    };
    let merged = fetch::fetch_all(&client, &source_list, &opts, args.concurrency).await;
    info!(count = merged.len(), "Fetched articles from all sources");

    // ---- Aggregate ----
    let articles = aggregate::aggregate(merged);
    info!(count = articles.len(), "Aggregated article list");

    // ---- Render and write outputs ----
    let generated_at = timefmt::generated_at();
    let page = html::render_page(&articles, &source_list, &generated_at);

    info!(path = %args.output, "Writing HTML page");
    if let Err(e) = tokio::fs::write(&args.output, page).await {
        error!(path = %args.output, error = %e, "Failed writing HTML page");
        return Err(e.into());
    }
    info!(path = %args.output, articles = articles.len(), "Wrote front page");

    if let Some(ref json_path) = args.json_output {
        if let Err(e) = json::write_articles(&articles, &generated_at, json_path).await {
            error!(path = %json_path, error = %e, "Failed writing JSON sidecar");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
