pub mod html;
pub mod sections;


use scraper::Html;

/// Parses raw markup into a document tree. Both the static and the rendered
/// strategy feed their markup through here before extraction.
pub fn parse_document(markup: &str) -> Html {
    Html::parse_document(markup)
}
