//! Fuzzy search for the plant collection.
//!
//! This crate provides:
//! - Levenshtein edit distance
//! - Normalized similarity scoring with a substring short-circuit
//! - Weighted name/description ranking over a whole collection
//!
//! Ranking is a pure function of the query and the records. There is no
//! index to maintain and no shared state; collections are small enough
//! that a full rescore per keystroke is the simpler and faster design.

mod fuzzy;
mod rank;
mod similarity;

pub use fuzzy::levenshtein_distance;
pub use rank::{Ranked, rank_records};
pub use similarity::similarity;

/// A record that can be ranked against a free-text query.
pub trait Rankable {
    /// Primary ranking signal.
    fn name(&self) -> &str;

    /// Secondary ranking signal. `None` when the record has no
    /// description; such records simply score zero on this signal.
    fn description(&self) -> Option<&str>;
}
