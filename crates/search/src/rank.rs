//! Weighted ranking of a record collection against a query.

use crate::Rankable;
use crate::similarity::similarity;
use serde::Serialize;

/// Weight of the name similarity in the composite score.
const NAME_WEIGHT: f64 = 0.7;
/// Weight of the description similarity in the composite score.
const DESCRIPTION_WEIGHT: f64 = 0.3;

/// A record paired with its position in the collection it was ranked from.
///
/// The index always refers to the input collection, so callers that
/// address records by saved position (deletion, detail display) keep
/// working on ranked output.
#[derive(Debug, Clone, Serialize)]
pub struct Ranked<'a, T> {
    /// The ranked record.
    pub record: &'a T,
    /// Position of the record in the input collection.
    pub index: usize,
}

/// Order `records` by decreasing relevance to `query`.
///
/// An empty or whitespace-only query returns the collection in its
/// original order, so clearing a search box restores save order. The
/// output is always a permutation of the input: every record appears
/// exactly once, and records with equal scores keep their relative
/// input order.
pub fn rank_records<'a, T: Rankable>(query: &str, records: &'a [T]) -> Vec<Ranked<'a, T>> {
    if query.trim().is_empty() {
        return records
            .iter()
            .enumerate()
            .map(|(index, record)| Ranked { record, index })
            .collect();
    }

    let mut scored: Vec<(Ranked<'a, T>, f64)> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let name_score = similarity(query, record.name());
            let description_score = record
                .description()
                .map_or(0.0, |description| similarity(query, description));
            let score = NAME_WEIGHT * name_score + DESCRIPTION_WEIGHT * description_score;
            (Ranked { record, index }, score)
        })
        .collect();

    // Vec::sort_by is stable, so ties keep input order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored.into_iter().map(|(ranked, _)| ranked).collect()
}
