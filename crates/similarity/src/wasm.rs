//! WASM bindings for similarity scoring.

use wasm_bindgen::prelude::*;

/// Similarity ratio between two strings.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
/// * `mode` - `bag_of_words`, `levenshtein` or `damerau_levenshtein`
///
/// # Returns
/// Ratio in `[0, 1]`; 0 for an unknown mode name
#[wasm_bindgen]
pub fn similarity(a: &str, b: &str, mode: &str) -> f64 {
    match mode.parse::<crate::Mode>() {
        Ok(mode) => crate::compare(a, b, mode),
        Err(_) => 0.0,
    }
}

/// Distinct normalized words of `text` as a sorted JSON array.
#[wasm_bindgen]
pub fn tokenize_words(text: &str) -> String {
    let bag = crate::tokenize(text);
    let mut words: Vec<&str> = bag.distinct().collect();
    words.sort_unstable();
    serde_json::to_string(&words).unwrap_or_else(|_| "[]".to_string())
}

/// Case-insensitive Levenshtein edit distance.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein::distance(a, b)
}

/// Damerau-Levenshtein distance (adjacent swaps cost one edit).
#[wasm_bindgen]
pub fn transposition_distance(a: &str, b: &str) -> usize {
    crate::damerau::distance(a, b)
}

/// Rank items and return sorted results as JSON.
///
/// # Arguments
/// * `query` - Query string
/// * `items_json` - JSON array of items with `id` and `text` fields
/// * `mode` - Algorithm name
/// * `threshold` - Minimum score kept
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of results with `id`, `text` and `score` fields, or `[]` on
/// invalid input
#[wasm_bindgen]
pub fn rank_items(
    query: &str,
    items_json: &str,
    mode: &str,
    threshold: f64,
    max_results: usize,
) -> String {
    let Ok(mode) = mode.parse::<crate::Mode>() else {
        return "[]".to_string();
    };

    let options = crate::RankOptions::default()
        .with_mode(mode)
        .with_threshold(threshold)
        .with_limit(max_results);

    match crate::rank_json(query, items_json, &options) {
        Ok(results) => serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string()),
        Err(_) => "[]".to_string(),
    }
}
