use serde::{Deserialize, Serialize};

/// Strategy that produced the final document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Plain HTTP fetch, no script execution
    Static,
    /// Browser-rendered fetch via WebDriver
    Rendered,
}

/// Semantic type of an extracted section, derived 1:1 from the originating tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Header,
    Nav,
    Main,
    Section,
    Footer,
    Article,
    /// Fallback when the document contains no semantic container tags
    Body,
}

impl SectionType {
    /// Maps a tag name to its section type, if the tag is a semantic container
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "header" => Some(SectionType::Header),
            "nav" => Some(SectionType::Nav),
            "main" => Some(SectionType::Main),
            "section" => Some(SectionType::Section),
            "footer" => Some(SectionType::Footer),
            "article" => Some(SectionType::Article),
            _ => None,
        }
    }
}

/// A semantically grouped, labeled fragment of the final document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section type derived from the originating tag
    #[serde(rename = "type")]
    pub section_type: SectionType,

    /// Text of the first h1-h3 under the section, else the first five words
    /// of its flattened text, else empty
    pub label: String,

    /// Serialized subtree, capped at the configured truncation limit
    #[serde(rename = "rawHtml")]
    pub raw_html: String,

    /// True iff the original serialization exceeded the truncation limit
    pub truncated: bool,
}

/// Page-level metadata extracted from the document head
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMeta {
    /// Contents of the <title> element
    #[serde(default)]
    pub title: String,

    /// meta[name=description], falling back to og:description
    #[serde(default)]
    pub description: String,

    /// html[lang], defaulting to "en"
    #[serde(default)]
    pub language: String,

    /// link[rel=canonical] target, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
}

/// Result of a single scrape: which strategy won, where the interaction loop
/// went, and the labeled sections of the final document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResult {
    /// URL the scrape was requested for
    pub url: String,

    /// Strategy that produced the final document
    #[serde(rename = "strategyUsed")]
    pub strategy_used: Strategy,

    /// URLs seen during the scrape; always starts with the requested URL,
    /// grows only when the interaction loop navigates to a new page
    #[serde(rename = "visitedUrls")]
    pub visited_urls: Vec<String>,

    /// Extracted sections in document order
    pub sections: Vec<Section>,

    /// Page-level metadata from the final document
    pub meta: PageMeta,

    /// RFC3339 timestamp taken at scrape start
    #[serde(rename = "scrapedAt")]
    pub scraped_at: String,
}
