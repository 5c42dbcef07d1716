//! Fuzzy text similarity over goal labels.
//!
//! Detects duplicate and near-duplicate goals so a user writing "go to
//! paris" learns that "paris to go" is already on somebody's list, and backs
//! the site-wide search box. All scores are on the familiar 0–100 scale.

mod matching;
mod normalize;
mod repeats;
mod scoring;
mod search;

pub use matching::{
    DEFAULT_TOP_N, ExactMatches, ScoredMatch, SimilarMatches, find_exact_matches,
    find_most_similar,
};
pub use repeats::first_repeated_text;
pub use scoring::{MAX_SCORE, simple_ratio, token_set_ratio};
pub use search::{DEFAULT_SEARCH_LIMIT, SearchHit, rank};
