use crate::cues::CUE_KEYWORDS;
use crate::error::RenderError;
use fantoccini::{Client, ClientBuilder, Locator};
use std::time::Duration;

/// Poll interval while waiting for the document to settle
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Quiet window held after readyState reaches "complete", giving late
/// script-driven DOM writes a chance to land
const STABILIZATION_WINDOW: Duration = Duration::from_millis(500);

/// A scoped WebDriver session. Acquired per scrape, never shared, and closed
/// unconditionally on every exit path of the render controller.
pub struct BrowserSession {
    client: Client,
}

impl BrowserSession {
    /// Connects to the WebDriver instance, trying common fallback URLs if the
    /// configured one is unreachable
    pub async fn connect(webdriver_url: &str) -> Result<Self, RenderError> {
        match ClientBuilder::native().connect(webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", webdriver_url);
                return Ok(Self { client });
            }
            Err(e) => {
                ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            }
        }

        let fallback_urls = [
            "http://localhost:9515", // ChromeDriver default
            "http://localhost:4444", // Selenium/geckodriver default
            "http://127.0.0.1:4444", // Try with IP instead of localhost
        ];

        for url in fallback_urls.iter() {
            if *url == webdriver_url {
                continue; // Skip if it's the same as the one we already tried
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            if let Ok(client) = ClientBuilder::native().connect(url).await {
                ::log::debug!("Connected to fallback WebDriver at {}", url);
                return Ok(Self { client });
            }
        }

        ::log::error!("Failed to connect to any WebDriver server");
        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(RenderError::Session(format!(
            "no WebDriver reachable at {} or fallbacks",
            webdriver_url
        )))
    }

    /// Navigates the session to the given URL
    pub async fn navigate(&self, url: &str) -> Result<(), RenderError> {
        self.client
            .goto(url)
            .await
            .map_err(|e| RenderError::Navigation(e.to_string()))
    }

    /// Waits until the page looks idle: readyState "complete" followed by a
    /// short stabilization window, all bounded by `timeout`.
    ///
    /// WebDriver exposes no request-level instrumentation, so this is an
    /// approximation of network idle rather than a true in-flight count.
    pub async fn wait_for_network_idle(&self, timeout: Duration) -> Result<(), RenderError> {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let state = self
                .client
                .execute("return document.readyState;", vec![])
                .await?;
            if state.as_str() == Some("complete") {
                break;
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(RenderError::Timeout("network idle".to_string()));
            }
            tokio::time::sleep(IDLE_POLL).await;
        }

        tokio::time::sleep(STABILIZATION_WINDOW).await;
        Ok(())
    }

    /// Current scroll height of the page
    pub async fn page_height(&self) -> Result<i64, RenderError> {
        let value = self
            .client
            .execute("return document.body.scrollHeight;", vec![])
            .await?;
        Ok(value.as_i64().unwrap_or(0))
    }

    /// Scrolls to the bottom of the page
    pub async fn scroll_to_bottom(&self) -> Result<(), RenderError> {
        self.client
            .execute("window.scrollTo(0, document.body.scrollHeight);", vec![])
            .await
            .map_err(|e| RenderError::Interaction(e.to_string()))?;
        Ok(())
    }

    /// Finds and clicks the highest-priority pagination control on the page.
    ///
    /// Controls are links and buttons; the first element whose visible text
    /// matches the highest-priority vocabulary keyword wins. Returns the
    /// matched keyword, or None when no control matches.
    pub async fn click_cue_control(&self) -> Result<Option<&'static str>, RenderError> {
        let controls = self.client.find_all(Locator::Css("a, button")).await?;

        let mut labeled = Vec::with_capacity(controls.len());
        for control in controls {
            // Stale elements are skipped rather than failing the iteration
            if let Ok(text) = control.text().await {
                labeled.push((control, text.to_lowercase()));
            }
        }

        for kw in CUE_KEYWORDS {
            if let Some(pos) = labeled.iter().position(|(_, text)| text.contains(kw)) {
                let (control, text) = labeled.remove(pos);
                ::log::info!("Clicking pagination control \"{}\" (cue: {})", text, kw);
                control
                    .click()
                    .await
                    .map_err(|e| RenderError::Interaction(e.to_string()))?;
                return Ok(Some(kw));
            }
        }

        Ok(None)
    }

    /// Current URL of the session
    pub async fn current_url(&self) -> Result<String, RenderError> {
        let url = self.client.current_url().await?;
        Ok(url.to_string())
    }

    /// Serialized DOM of the current page
    pub async fn document(&self) -> Result<String, RenderError> {
        Ok(self.client.source().await?)
    }

    /// Closes the session. Errors are logged, not propagated; the session is
    /// gone either way.
    pub async fn close(self) {
        if let Err(e) = self.client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }
    }
}
