use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::evaluator;
use crate::fetcher;
use crate::parsers::{self, html, sections};
use crate::renderer;
use crate::results::{ScrapeResult, Strategy};
use chrono::Utc;
use std::time::Duration;
use url::Url;

/// Runs the full pipeline for one URL: static fetch, sufficiency evaluation,
/// optional render escalation, then section extraction.
///
/// Returns an error only when no document could be obtained at all; a degraded
/// render still yields a populated result from whatever was captured.
pub async fn scrape(config: &ScrapeConfig) -> Result<ScrapeResult, ScrapeError> {
    Url::parse(&config.url).map_err(|_| ScrapeError::InvalidUrl(config.url.clone()))?;

    let scraped_at = Utc::now().to_rfc3339();
    ::log::info!("Scraping {}", config.url);

    let timeout = Duration::from_secs(config.request_timeout_secs);
    let outcome = fetcher::fetch_static(&config.url, timeout).await;
    let signal = evaluator::evaluate(&outcome);
    ::log::info!(
        "Sufficiency for {}: failed={}, text_len={}, cues={:?}",
        config.url,
        signal.static_fetch_failed,
        signal.extracted_text_length,
        signal.interaction_cues_found
    );

    let (strategy_used, markup, visited_urls) = if signal.should_escalate(config.min_text_length) {
        ::log::info!("Escalating {} to rendered strategy", config.url);
        let rendered = renderer::render(config).await;
        if let Some(e) = &rendered.error {
            ::log::warn!("Rendered strategy for {} was partial: {}", config.url, e);
        }
        match rendered.markup {
            Some(markup) => (Strategy::Rendered, markup, rendered.visited),
            // Rendering came back empty-handed; the static document, if any,
            // is still better than nothing
            None => match outcome.markup {
                Some(markup) => {
                    ::log::warn!(
                        "Rendering produced no document for {}, using static markup",
                        config.url
                    );
                    (Strategy::Static, markup, vec![config.url.clone()])
                }
                None => return Err(ScrapeError::NoContent(config.url.clone())),
            },
        }
    } else {
        match outcome.markup {
            Some(markup) => (Strategy::Static, markup, vec![config.url.clone()]),
            None => return Err(ScrapeError::NoContent(config.url.clone())),
        }
    };

    let doc = parsers::parse_document(&markup);
    let section_list = sections::extract(&doc, config.truncate_limit);
    let meta = html::extract_meta(&doc);
    ::log::info!(
        "Extracted {} sections from {} ({:?} strategy)",
        section_list.len(),
        config.url,
        strategy_used
    );

    Ok(ScrapeResult {
        url: config.url.clone(),
        strategy_used,
        visited_urls,
        sections: section_list,
        meta,
        scraped_at,
    })
}
