use crate::cues;
use crate::results::PageMeta;
use crate::utils::flatten_whitespace;
use scraper::{Html, Selector};

/// Extracts the flattened visible text of the document body
pub fn flatten_text(doc: &Html) -> String {
    let body_selector = Selector::parse("body").unwrap();
    let text = doc
        .select(&body_selector)
        .flat_map(|n| n.text())
        .collect::<Vec<_>>()
        .join(" ");

    flatten_whitespace(&text)
}

/// Scans link and button labels for interaction-cue keywords.
///
/// Returns the matched keywords in vocabulary order, each at most once.
pub fn find_interaction_cues(doc: &Html) -> Vec<&'static str> {
    let control_selector = Selector::parse("a, button").unwrap();
    let labels: Vec<String> = doc
        .select(&control_selector)
        .map(|e| flatten_whitespace(&e.text().collect::<Vec<_>>().join(" ")).to_lowercase())
        .collect();

    let mut found = Vec::new();
    for kw in cues::CUE_KEYWORDS {
        if labels.iter().any(|label| label.contains(kw)) && !found.contains(&kw) {
            found.push(kw);
        }
    }

    if !found.is_empty() {
        ::log::debug!("Found interaction cues: {:?}", found);
    }
    found
}

/// Extracts page-level metadata from the document head
pub fn extract_meta(doc: &Html) -> PageMeta {
    let title_selector = Selector::parse("title").unwrap();
    let title = doc
        .select(&title_selector)
        .next()
        .map(|t| flatten_whitespace(&t.text().collect::<Vec<_>>().join(" ")))
        .unwrap_or_default();

    let desc_selector = Selector::parse(
        r#"meta[name="description"], meta[property="og:description"]"#,
    )
    .unwrap();
    let description = doc
        .select(&desc_selector)
        .filter_map(|m| m.value().attr("content"))
        .map(|c| c.trim().to_string())
        .find(|c| !c.is_empty())
        .unwrap_or_default();

    let html_selector = Selector::parse("html").unwrap();
    let language = doc
        .select(&html_selector)
        .next()
        .and_then(|h| h.value().attr("lang"))
        .map(|l| l.to_string())
        .unwrap_or_else(|| "en".to_string());

    let canonical_selector = Selector::parse(r#"link[rel="canonical"]"#).unwrap();
    let canonical = doc
        .select(&canonical_selector)
        .next()
        .and_then(|l| l.value().attr("href"))
        .map(|h| h.to_string());

    PageMeta {
        title,
        description,
        language,
        canonical,
    }
}
