// Re-export modules
pub mod browser;
pub mod config;
pub mod cues;
pub mod error;
pub mod evaluator;
pub mod fetcher;
pub mod orchestrator;
pub mod parsers;
pub mod renderer;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScrapeConfig;
pub use error::ScrapeError;
pub use results::{ScrapeResult, Section, SectionType, Strategy};

/// Builder for a single scrape
///
/// ```no_run
/// use smart_scrape::Scrape;
///
/// # async fn run() -> Result<(), smart_scrape::ScrapeError> {
/// let result = Scrape::new("https://example.com")
///     .with_request_timeout(15)
///     .run()
///     .await?;
/// println!("{} sections via {:?}", result.sections.len(), result.strategy_used);
/// # Ok(())
/// # }
/// ```
pub struct Scrape {
    config: ScrapeConfig,
}

impl Scrape {
    /// Create a new scrape builder for the given URL
    pub fn new(url: &str) -> Self {
        Self {
            config: ScrapeConfig::new(url),
        }
    }

    /// Set the timeout in seconds for the static fetch and each browser wait
    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.config.request_timeout_secs = seconds;
        self
    }

    /// Set the upper bound on scroll/click iterations in the rendered strategy
    pub fn with_max_interactions(mut self, max_interactions: usize) -> Self {
        self.config.max_interactions = max_interactions;
        self
    }

    /// Set the flattened-text length below which the scrape escalates
    pub fn with_min_text_length(mut self, min_text_length: usize) -> Self {
        self.config.min_text_length = min_text_length;
        self
    }

    /// Set the per-section serialization cap in characters
    pub fn with_truncate_limit(mut self, truncate_limit: usize) -> Self {
        self.config.truncate_limit = truncate_limit;
        self
    }

    /// Set the WebDriver URL used when the scrape escalates to rendering
    pub fn with_webdriver_url(mut self, webdriver_url: &str) -> Self {
        self.config.webdriver_url = webdriver_url.to_string();
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ScrapeConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = ScrapeConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Run the scrape pipeline and return the assembled result
    pub async fn run(self) -> Result<ScrapeResult, ScrapeError> {
        let mut config = self.config;

        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }

        orchestrator::scrape(&config).await
    }
}
