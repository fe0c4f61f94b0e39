use crate::fetcher::FetchOutcome;
use crate::parsers::{self, html};

/// Signals derived from a static fetch, used to decide whether the scrape
/// needs a browser-rendered pass
#[derive(Debug, Clone)]
pub struct SufficiencySignal {
    /// The static fetch itself failed
    pub static_fetch_failed: bool,

    /// Length in characters of the flattened visible text
    pub extracted_text_length: usize,

    /// Vocabulary keywords found in link/button labels, vocabulary order
    pub interaction_cues_found: Vec<&'static str>,
}

impl SufficiencySignal {
    /// Escalate to rendering iff the fetch failed, the visible text is below
    /// the threshold, or any pagination cue is present
    pub fn should_escalate(&self, min_text_length: usize) -> bool {
        self.static_fetch_failed
            || self.extracted_text_length < min_text_length
            || !self.interaction_cues_found.is_empty()
    }
}

/// Inspects a static fetch outcome and computes its sufficiency signal.
///
/// Pure with respect to the outcome: no side effects, deterministic for the
/// same markup.
pub fn evaluate(outcome: &FetchOutcome) -> SufficiencySignal {
    let (extracted_text_length, interaction_cues_found) = match &outcome.markup {
        Some(markup) => {
            let doc = parsers::parse_document(markup);
            let text = html::flatten_text(&doc);
            (text.chars().count(), html::find_interaction_cues(&doc))
        }
        None => (0, Vec::new()),
    };

    SufficiencySignal {
        static_fetch_failed: outcome.failed,
        extracted_text_length,
        interaction_cues_found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_text(words: usize) -> String {
        let body = vec!["word"; words].join(" ");
        format!("<html><body><p>{}</p></body></html>", body)
    }

    #[test]
    fn test_sufficient_static_page_does_not_escalate() {
        // 100 five-char "word " units is well past 200 characters
        let outcome = FetchOutcome::ok(page_with_text(100));
        let signal = evaluate(&outcome);

        assert!(!signal.static_fetch_failed);
        assert!(signal.extracted_text_length >= 200);
        assert!(signal.interaction_cues_found.is_empty());
        assert!(!signal.should_escalate(200));
    }

    #[test]
    fn test_short_text_escalates() {
        let outcome = FetchOutcome::ok("<html><body><div id=\"app\"></div></body></html>".into());
        let signal = evaluate(&outcome);

        assert!(signal.extracted_text_length < 50);
        assert!(signal.should_escalate(200));
    }

    #[test]
    fn test_fetch_failure_escalates() {
        let outcome = FetchOutcome::failure();
        let signal = evaluate(&outcome);

        assert!(signal.static_fetch_failed);
        assert_eq!(signal.extracted_text_length, 0);
        assert!(signal.should_escalate(200));
    }

    #[test]
    fn test_next_link_escalates_despite_long_text() {
        let markup = format!(
            "<html><body><p>{}</p><a href=\"/page/2\">Next</a></body></html>",
            vec!["word"; 100].join(" ")
        );
        let outcome = FetchOutcome::ok(markup);
        let signal = evaluate(&outcome);

        assert!(signal.extracted_text_length >= 200);
        assert_eq!(signal.interaction_cues_found, vec!["next"]);
        assert!(signal.should_escalate(200));
    }

    #[test]
    fn test_button_cue_detected() {
        let markup = format!(
            "<html><body><p>{}</p><button>Load More</button></body></html>",
            vec!["word"; 100].join(" ")
        );
        let outcome = FetchOutcome::ok(markup);
        let signal = evaluate(&outcome);

        assert_eq!(signal.interaction_cues_found, vec!["load more", "more"]);
        assert!(signal.should_escalate(200));
    }

    #[test]
    fn test_cue_vocabulary_is_case_insensitive() {
        let markup = format!(
            "<html><body><p>{}</p><a href=\"#\">SHOW MORE</a></body></html>",
            vec!["word"; 100].join(" ")
        );
        let signal = evaluate(&FetchOutcome::ok(markup));

        assert!(signal.interaction_cues_found.contains(&"show more"));
    }

    #[test]
    fn test_threshold_boundary() {
        let markup = format!("<html><body>{}</body></html>", "a".repeat(200));
        let signal = evaluate(&FetchOutcome::ok(markup));

        assert_eq!(signal.extracted_text_length, 200);
        // Exactly at the threshold is sufficient
        assert!(!signal.should_escalate(200));
        assert!(signal.should_escalate(201));
    }
}
