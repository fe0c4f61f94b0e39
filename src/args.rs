use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "smart-scrape")]
#[command(about = "Scrapes a web page into labeled JSON sections, rendering it in a browser only when the static HTML is insufficient")]
#[command(version)]
pub struct Args {
    /// URL to scrape
    pub url: String,

    /// Timeout in seconds for the static fetch and each browser wait
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Maximum scroll/click iterations when rendering
    #[arg(long, default_value_t = 3)]
    pub max_interactions: usize,

    /// Text length below which the static page is considered insufficient
    #[arg(long, default_value_t = 200)]
    pub min_text_length: usize,

    /// Maximum characters kept of each section's raw HTML
    #[arg(long, default_value_t = 1000)]
    pub truncate_limit: usize,

    /// WebDriver URL (defaults to http://localhost:4444, or WEBDRIVER_URL)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Load configuration from a JSON file instead of the flags above
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}
