//! Category and text filtering over the prompt catalog.

use super::catalog::{AiPrompt, PromptCategory};

/// Compute the visible subset of `catalog` for the given category selection
/// and search query.
///
/// The filter is stable: entries keep their catalog order and are never
/// re-sorted. An entry is visible iff it passes both tests:
///
/// - category: `selected` is [`PromptCategory::All`] or equals the entry's
///   category
/// - search: the query is a case-insensitive substring of the title, the
///   prompt text, or the category label (an empty query matches everything)
///
/// The query is matched literally - no trimming, so a whitespace-only query
/// participates as an ordinary substring.
pub fn filter_prompts<'a>(
    catalog: &'a [AiPrompt],
    selected: PromptCategory,
    query: &str,
) -> Vec<&'a AiPrompt> {
    let needle = query.to_lowercase();

    catalog
        .iter()
        .filter(|p| {
            let matches_category = selected == PromptCategory::All || p.category == selected;
            let matches_search = p.title.to_lowercase().contains(&needle)
                || p.prompt.to_lowercase().contains(&needle)
                || p.category.label().to_lowercase().contains(&needle);
            matches_category && matches_search
        })
        .collect()
}
