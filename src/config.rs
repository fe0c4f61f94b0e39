use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for a single scrape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// URL to scrape
    pub url: String,

    /// Timeout in seconds for the static fetch and each browser wait
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Upper bound on scroll/click iterations in the rendered strategy
    #[serde(default = "default_max_interactions")]
    pub max_interactions: usize,

    /// Flattened-text length below which the static document is considered
    /// insufficient and the scrape escalates to rendering
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,

    /// Maximum number of characters kept of each section's serialized subtree
    #[serde(default = "default_truncate_limit")]
    pub truncate_limit: usize,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
}

/// Default timeout for the static fetch and browser waits
fn default_request_timeout_secs() -> u64 {
    10
}

/// Default interaction loop bound
fn default_max_interactions() -> usize {
    3
}

/// Default sufficiency threshold in characters
fn default_min_text_length() -> usize {
    200
}

/// Default per-section serialization cap in characters
fn default_truncate_limit() -> usize {
    1000
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

impl ScrapeConfig {
    /// Create a new configuration with default values
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            request_timeout_secs: default_request_timeout_secs(),
            max_interactions: default_max_interactions(),
            min_text_length: default_min_text_length(),
            truncate_limit: default_truncate_limit(),
            webdriver_url: default_webdriver_url(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
