use std::time::Duration;

/// User agent sent with static fetches
const USER_AGENT: &str = "smart-scrape/0.1";

/// Outcome of a static fetch. A transport failure is a signaled state, not an
/// error: the sufficiency evaluator consumes it and escalates to rendering.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Response body, when the fetch succeeded
    pub markup: Option<String>,

    /// True on any transport error or non-2xx status
    pub failed: bool,
}

impl FetchOutcome {
    /// A successful fetch with the given markup
    pub fn ok(markup: String) -> Self {
        Self {
            markup: Some(markup),
            failed: false,
        }
    }

    /// A failed fetch with no usable markup
    pub fn failure() -> Self {
        Self {
            markup: None,
            failed: true,
        }
    }
}

/// Retrieves a URL's raw markup without executing scripts.
///
/// Follows redirects the transport performs automatically; does not retry.
/// Every failure mode (timeout, DNS, connection, non-2xx) collapses into
/// `FetchOutcome::failure()` rather than an error.
pub async fn fetch_static(url: &str, timeout: Duration) -> FetchOutcome {
    ::log::debug!("Static fetch: {}", url);

    let client = match reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            ::log::error!("Failed to build HTTP client: {}", e);
            return FetchOutcome::failure();
        }
    };

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            ::log::warn!("Static fetch failed for {}: {}", url, e);
            return FetchOutcome::failure();
        }
    };

    if !response.status().is_success() {
        ::log::warn!(
            "Static fetch for {} returned status {}",
            url,
            response.status()
        );
        return FetchOutcome::failure();
    }

    match response.text().await {
        Ok(body) => {
            ::log::debug!("Static fetch for {} returned {} bytes", url, body.len());
            FetchOutcome::ok(body)
        }
        Err(e) => {
            ::log::warn!("Failed to read response body for {}: {}", url, e);
            FetchOutcome::failure()
        }
    }
}
