//! Literal duplicate detection within a single user's list.

use ahash::AHashMap;

use crate::model::Goal;

/// Returns the first goal text (in input order) that appears more than once.
///
/// This is the cheap byte-for-byte check shown on a user's own list page;
/// fuzzy near-duplicates are the matcher's job.
pub fn first_repeated_text(goals: &[Goal]) -> Option<&str> {
    let mut counts: AHashMap<&str, usize> = AHashMap::with_capacity(goals.len());
    for goal in goals {
        *counts.entry(goal.text.as_str()).or_insert(0) += 1;
    }
    goals
        .iter()
        .map(|goal| goal.text.as_str())
        .find(|text| counts[text] > 1)
}
