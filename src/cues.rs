//! Interaction-cue vocabulary shared by the sufficiency evaluator and the
//! render controller. Kept as one ordered table so new keywords or locales
//! extend data, not control flow.

/// Pagination/expansion keywords, in click priority order. Matching is a
/// case-insensitive substring test against link and button labels, so "next"
/// also covers "next page" labels.
pub const CUE_KEYWORDS: [&str; 5] = ["show more", "load more", "next", "next page", "more"];

/// Returns the first vocabulary keyword the label matches, if any
pub fn match_label(label: &str) -> Option<&'static str> {
    let lowered = label.to_lowercase();
    let lowered = lowered.trim();
    CUE_KEYWORDS
        .iter()
        .find(|kw| lowered.contains(*kw))
        .copied()
}
