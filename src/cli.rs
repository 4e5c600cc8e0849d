//! Command-line interface definitions.
//!
//! All options have defaults so a bare `tech_frontpage` run fetches the
//! built-in sources and writes `index.html` in the current directory.

use clap::Parser;

/// Command-line arguments for the front page generator.
///
/// # Examples
///
/// ```sh
/// # Defaults: built-in sources, ./index.html
/// tech_frontpage
///
/// # Custom sources and a JSON sidecar
/// tech_frontpage --sources feeds.yaml --json-output articles.json
///
/// # Drop articles without a usable image
/// tech_frontpage --require-image
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output path for the generated HTML page
    #[arg(short, long, default_value = "index.html")]
    pub output: String,

    /// Optional output path for a JSON sidecar of the article list
    #[arg(long)]
    pub json_output: Option<String>,

    /// Optional YAML file replacing the built-in source list
    #[arg(short, long)]
    pub sources: Option<String>,

    /// Maximum entries taken from each feed
    #[arg(long, default_value_t = 8)]
    pub max_entries: usize,

    /// Number of feeds fetched concurrently
    #[arg(long, default_value_t = 6)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Drop articles that resolve to no usable image
    #[arg(long, default_value_t = false)]
    pub require_image: bool,
}
