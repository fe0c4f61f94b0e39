use crate::results::{Section, SectionType};
use crate::utils::{flatten_whitespace, truncate_chars};
use scraper::{ElementRef, Html, Selector};

/// Tags treated as semantic section containers
const SEMANTIC_TAGS: &str = "header, nav, main, section, footer, article";

/// Maximum label length in characters
const LABEL_LIMIT: usize = 50;

/// Walks the document and groups it into labeled sections.
///
/// Collects every semantic container anywhere in the tree in document order;
/// nested containers each produce their own entry. A document with no semantic
/// tags yields a single section of type `body` covering the whole document.
pub fn extract(doc: &Html, truncate_limit: usize) -> Vec<Section> {
    let semantic_selector = Selector::parse(SEMANTIC_TAGS).unwrap();
    let candidates: Vec<ElementRef> = doc.select(&semantic_selector).collect();

    if candidates.is_empty() {
        ::log::debug!("No semantic containers found, falling back to body");
        let body_selector = Selector::parse("body").unwrap();
        let element = doc
            .select(&body_selector)
            .next()
            .unwrap_or_else(|| doc.root_element());
        return vec![build_section(element, SectionType::Body, truncate_limit)];
    }

    ::log::debug!("Found {} semantic containers", candidates.len());
    candidates
        .into_iter()
        .map(|element| {
            let section_type =
                SectionType::from_tag(element.value().name()).unwrap_or(SectionType::Body);
            build_section(element, section_type, truncate_limit)
        })
        .collect()
}

/// Builds a single section record from a container element
fn build_section(element: ElementRef, section_type: SectionType, truncate_limit: usize) -> Section {
    let label = derive_label(element);
    let serialized = element.html();
    let truncated = serialized.chars().count() > truncate_limit;
    let raw_html = truncate_chars(&serialized, truncate_limit).to_string();

    Section {
        section_type,
        label,
        raw_html,
        truncated,
    }
}

/// Derives a section label: first h1-h3 text under the subtree, else the
/// first five words of the flattened text, else empty
fn derive_label(element: ElementRef) -> String {
    let heading_selector = Selector::parse("h1, h2, h3").unwrap();
    if let Some(heading) = element.select(&heading_selector).next() {
        let text = flatten_whitespace(&heading.text().collect::<Vec<_>>().join(" "));
        if !text.is_empty() {
            return truncate_chars(&text, LABEL_LIMIT).to_string();
        }
    }

    let text = flatten_whitespace(&element.text().collect::<Vec<_>>().join(" "));
    text.split_whitespace()
        .take(5)
        .collect::<Vec<_>>()
        .join(" ")
}
