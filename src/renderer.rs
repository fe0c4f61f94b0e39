use crate::browser::BrowserSession;
use crate::config::ScrapeConfig;
use crate::error::RenderError;
use std::time::Duration;

/// Best-effort result of the rendered strategy. `markup` and `visited` hold
/// whatever was accumulated before any failure; `error` records what went
/// wrong without aborting the scrape.
#[derive(Debug)]
pub struct RenderOutcome {
    /// Final captured DOM, possibly partially paginated
    pub markup: Option<String>,

    /// URLs seen during rendering, starting with the requested URL
    pub visited: Vec<String>,

    /// Error encountered and contained during the loop, if any
    pub error: Option<RenderError>,
}

/// The browser actions the interaction loop drives. `BrowserSession` is the
/// real implementation; the loop itself only depends on this surface.
pub(crate) trait InteractiveSession {
    async fn navigate(&self, url: &str) -> Result<(), RenderError>;
    async fn wait_for_network_idle(&self, timeout: Duration) -> Result<(), RenderError>;
    async fn document(&self) -> Result<String, RenderError>;
    async fn current_url(&self) -> Result<String, RenderError>;
    async fn page_height(&self) -> Result<i64, RenderError>;
    async fn scroll_to_bottom(&self) -> Result<(), RenderError>;
    async fn click_cue_control(&self) -> Result<Option<&'static str>, RenderError>;
}

impl InteractiveSession for BrowserSession {
    async fn navigate(&self, url: &str) -> Result<(), RenderError> {
        BrowserSession::navigate(self, url).await
    }

    async fn wait_for_network_idle(&self, timeout: Duration) -> Result<(), RenderError> {
        BrowserSession::wait_for_network_idle(self, timeout).await
    }

    async fn document(&self) -> Result<String, RenderError> {
        BrowserSession::document(self).await
    }

    async fn current_url(&self) -> Result<String, RenderError> {
        BrowserSession::current_url(self).await
    }

    async fn page_height(&self) -> Result<i64, RenderError> {
        BrowserSession::page_height(self).await
    }

    async fn scroll_to_bottom(&self) -> Result<(), RenderError> {
        BrowserSession::scroll_to_bottom(self).await
    }

    async fn click_cue_control(&self) -> Result<Option<&'static str>, RenderError> {
        BrowserSession::click_cue_control(self).await
    }
}

/// Runs the rendered strategy: navigate, wait for idle, then a bounded
/// scroll/click interaction loop driven by the cue vocabulary.
///
/// The browser session is scoped to this call and closed on every exit path.
/// Errors inside the loop are contained: the outcome carries the partial
/// document and visited URLs alongside the error.
pub async fn render(config: &ScrapeConfig) -> RenderOutcome {
    let mut visited = vec![config.url.clone()];

    let session = match BrowserSession::connect(&config.webdriver_url).await {
        Ok(session) => session,
        Err(e) => {
            return RenderOutcome {
                markup: None,
                visited,
                error: Some(e),
            };
        }
    };

    let mut markup = None;
    let error = match drive(&session, config, &mut markup, &mut visited).await {
        Ok(()) => None,
        Err(e) => {
            ::log::warn!("Render loop for {} degraded: {}", config.url, e);
            Some(e)
        }
    };

    session.close().await;

    RenderOutcome {
        markup,
        visited,
        error,
    }
}

/// Navigation and interaction protocol. Progress is written through the
/// `markup` and `visited` out-parameters as it happens, so the caller keeps
/// the partial state even when this returns an error mid-loop.
async fn drive<S: InteractiveSession>(
    session: &S,
    config: &ScrapeConfig,
    markup: &mut Option<String>,
    visited: &mut Vec<String>,
) -> Result<(), RenderError> {
    let timeout = Duration::from_secs(config.request_timeout_secs);

    session.navigate(&config.url).await?;
    if let Err(e) = session.wait_for_network_idle(timeout).await {
        // The page may still be usable; capture whatever has loaded
        ::log::debug!("Initial idle wait for {}: {}", config.url, e);
    }

    *markup = Some(session.document().await?);
    let mut current_url = session.current_url().await?;

    for iteration in 1..=config.max_interactions {
        let height_before = session.page_height().await?;
        session.scroll_to_bottom().await?;
        if let Err(e) = session.wait_for_network_idle(timeout).await {
            ::log::debug!("Post-scroll idle wait: {}", e);
        }
        let height_after = session.page_height().await?;
        let grew = height_after > height_before;

        let mut clicked = false;
        if grew {
            ::log::debug!(
                "Iteration {}: scroll grew page {} -> {}",
                iteration,
                height_before,
                height_after
            );
        } else if let Some(kw) = session.click_cue_control().await? {
            clicked = true;
            ::log::debug!("Iteration {}: clicked cue control for \"{}\"", iteration, kw);
            if let Err(e) = session.wait_for_network_idle(timeout).await {
                ::log::debug!("Post-click idle wait: {}", e);
            }
        }

        if !grew && !clicked {
            ::log::debug!("Iteration {}: no further content signal, stopping", iteration);
            break;
        }

        *markup = Some(session.document().await?);

        let url_after = session.current_url().await?;
        if clicked && url_after != current_url {
            ::log::info!("Pagination navigated to {}", url_after);
            visited.push(url_after.clone());
            current_url = url_after;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// What the fake's pagination control does when clicked
    enum ClickBehavior {
        /// No matching control on the page
        NoControl,
        /// Control found, content loads in place
        InPlace,
        /// Control found, click navigates to the given URL
        Navigate(&'static str),
        /// Click blows up mid-loop
        Fail,
    }

    /// Scripted session: scroll growth and click behavior are dequeued per
    /// iteration, and every action is counted.
    struct FakeSession {
        height: Mutex<i64>,
        grow_on_scroll: Mutex<VecDeque<bool>>,
        clicks_behavior: Mutex<VecDeque<ClickBehavior>>,
        url: Mutex<String>,
        scroll_count: Mutex<usize>,
        click_count: Mutex<usize>,
    }

    impl FakeSession {
        fn new(grow_on_scroll: Vec<bool>, clicks_behavior: Vec<ClickBehavior>) -> Self {
            Self {
                height: Mutex::new(1000),
                grow_on_scroll: Mutex::new(grow_on_scroll.into()),
                clicks_behavior: Mutex::new(clicks_behavior.into()),
                url: Mutex::new(String::new()),
                scroll_count: Mutex::new(0),
                click_count: Mutex::new(0),
            }
        }

        fn scrolls(&self) -> usize {
            *self.scroll_count.lock().unwrap()
        }

        fn clicks(&self) -> usize {
            *self.click_count.lock().unwrap()
        }
    }

    impl InteractiveSession for FakeSession {
        async fn navigate(&self, url: &str) -> Result<(), RenderError> {
            *self.url.lock().unwrap() = url.to_string();
            Ok(())
        }

        async fn wait_for_network_idle(&self, _timeout: Duration) -> Result<(), RenderError> {
            Ok(())
        }

        async fn document(&self) -> Result<String, RenderError> {
            let url = self.url.lock().unwrap().clone();
            Ok(format!("<html><body><p>page at {}</p></body></html>", url))
        }

        async fn current_url(&self) -> Result<String, RenderError> {
            Ok(self.url.lock().unwrap().clone())
        }

        async fn page_height(&self) -> Result<i64, RenderError> {
            Ok(*self.height.lock().unwrap())
        }

        async fn scroll_to_bottom(&self) -> Result<(), RenderError> {
            *self.scroll_count.lock().unwrap() += 1;
            if self.grow_on_scroll.lock().unwrap().pop_front() == Some(true) {
                *self.height.lock().unwrap() += 500;
            }
            Ok(())
        }

        async fn click_cue_control(&self) -> Result<Option<&'static str>, RenderError> {
            *self.click_count.lock().unwrap() += 1;
            match self.clicks_behavior.lock().unwrap().pop_front() {
                Some(ClickBehavior::InPlace) => Ok(Some("load more")),
                Some(ClickBehavior::Navigate(url)) => {
                    *self.url.lock().unwrap() = url.to_string();
                    Ok(Some("next"))
                }
                Some(ClickBehavior::Fail) => {
                    Err(RenderError::Interaction("click failed".to_string()))
                }
                Some(ClickBehavior::NoControl) | None => Ok(None),
            }
        }
    }

    const START_URL: &str = "https://example.com/feed";

    async fn run_drive(session: &FakeSession) -> (Result<(), RenderError>, Option<String>, Vec<String>) {
        let config = ScrapeConfig::new(START_URL);
        let mut markup = None;
        let mut visited = vec![config.url.clone()];
        let result = drive(session, &config, &mut markup, &mut visited).await;
        (result, markup, visited)
    }

    #[tokio::test]
    async fn test_loop_never_exceeds_three_iterations() {
        // The page grows on every scroll, so nothing stops the loop early
        let session = FakeSession::new(vec![true; 10], vec![]);
        let (result, markup, visited) = run_drive(&session).await;

        assert!(result.is_ok());
        assert!(markup.is_some());
        assert_eq!(session.scrolls(), 3);
        assert_eq!(session.clicks(), 0);
        // Scroll growth alone never navigates
        assert_eq!(visited, vec![START_URL.to_string()]);
    }

    #[tokio::test]
    async fn test_each_click_navigating_caps_visited_at_four() {
        let session = FakeSession::new(
            vec![false; 10],
            vec![
                ClickBehavior::Navigate("https://example.com/feed?page=2"),
                ClickBehavior::Navigate("https://example.com/feed?page=3"),
                ClickBehavior::Navigate("https://example.com/feed?page=4"),
                ClickBehavior::Navigate("https://example.com/feed?page=5"),
            ],
        );
        let (result, _, visited) = run_drive(&session).await;

        assert!(result.is_ok());
        assert_eq!(session.clicks(), 3);
        assert_eq!(
            visited,
            vec![
                START_URL.to_string(),
                "https://example.com/feed?page=2".to_string(),
                "https://example.com/feed?page=3".to_string(),
                "https://example.com/feed?page=4".to_string(),
            ]
        );
        assert!((1..=4).contains(&visited.len()));
    }

    #[tokio::test]
    async fn test_in_place_clicks_leave_visited_unchanged() {
        let session = FakeSession::new(
            vec![false; 10],
            vec![
                ClickBehavior::InPlace,
                ClickBehavior::InPlace,
                ClickBehavior::InPlace,
            ],
        );
        let (result, _, visited) = run_drive(&session).await;

        assert!(result.is_ok());
        // In-place clicks keep the loop going for all three iterations
        assert_eq!(session.clicks(), 3);
        assert_eq!(visited, vec![START_URL.to_string()]);
    }

    #[tokio::test]
    async fn test_no_growth_and_no_control_stops_after_first_iteration() {
        let session = FakeSession::new(vec![false; 10], vec![ClickBehavior::NoControl]);
        let (result, markup, visited) = run_drive(&session).await;

        assert!(result.is_ok());
        assert_eq!(session.scrolls(), 1);
        assert_eq!(session.clicks(), 1);
        assert_eq!(visited.len(), 1);
        assert!(markup.is_some());
    }

    #[tokio::test]
    async fn test_mid_loop_failure_preserves_partial_state() {
        let session = FakeSession::new(
            vec![false; 10],
            vec![
                ClickBehavior::Navigate("https://example.com/feed?page=2"),
                ClickBehavior::Fail,
            ],
        );
        let (result, markup, visited) = run_drive(&session).await;

        // The error surfaces from drive, but everything captured before the
        // failing click is still there for extraction
        assert!(result.is_err());
        assert!(markup.is_some());
        assert_eq!(
            visited,
            vec![
                START_URL.to_string(),
                "https://example.com/feed?page=2".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_mixed_growth_and_clicks_respect_bound() {
        // Grows once, then stalls and paginates by click
        let session = FakeSession::new(
            vec![true, false, false],
            vec![
                ClickBehavior::Navigate("https://example.com/feed?page=2"),
                ClickBehavior::Navigate("https://example.com/feed?page=3"),
            ],
        );
        let (result, _, visited) = run_drive(&session).await;

        assert!(result.is_ok());
        assert_eq!(session.scrolls(), 3);
        assert_eq!(session.clicks(), 2);
        assert_eq!(visited.len(), 3);
        assert!((1..=4).contains(&visited.len()));
    }
}
