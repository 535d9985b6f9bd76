//! Normalized similarity between a query and a target string.

use crate::fuzzy::levenshtein_distance;

/// Score how well `target` matches `query`, from 0.0 (unrelated) to 1.0
/// (perfect match).
///
/// An empty or whitespace-only query means "no filter" and scores 1.0
/// against everything. Both strings are trimmed and lowercased before
/// comparison. If the target then contains the query as a substring the
/// score is exactly 1.0, so "ros" fully matches both "Rose" and
/// "Rosemary". Otherwise the score decays linearly with edit distance,
/// measured against the longer of the two strings, and is clamped at 0.0.
pub fn similarity(query: &str, target: &str) -> f64 {
    if query.trim().is_empty() {
        return 1.0;
    }

    let query = query.trim().to_lowercase();
    let target = target.trim().to_lowercase();

    if target.contains(&query) {
        return 1.0;
    }

    let distance = levenshtein_distance(&query, &target);
    let max_len = query.chars().count().max(target.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    (1.0 - distance as f64 / max_len as f64).max(0.0)
}
