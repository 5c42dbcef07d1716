//! Duplicate and near-duplicate goal detection.

use serde::Serialize;

use crate::model::Goal;

use super::scoring::{is_exact, token_set_ratio};

/// Default size of the near-duplicate working set.
pub const DEFAULT_TOP_N: usize = 3;

/// All candidates whose text is an exact duplicate of the target.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExactMatches<'a> {
    pub matches: Vec<&'a Goal>,
    pub count: usize,
}

/// One slot of the near-duplicate working set.
///
/// A `None` goal is a placeholder for a slot no candidate ever claimed;
/// its score is always 0 and means "no meaningful match", never "the target
/// compared to itself".
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMatch<'a> {
    pub goal: Option<&'a Goal>,
    pub score: u32,
}

impl ScoredMatch<'_> {
    const PLACEHOLDER: Self = Self {
        goal: None,
        score: 0,
    };
}

/// The `top_n` most similar candidates plus the best score observed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarMatches<'a> {
    /// Slot order reflects discovery order, not score order.
    pub top: Vec<ScoredMatch<'a>>,
    /// Highest token-set score over *all* candidates, 0 when none scored.
    pub best_score: u32,
}

/// Finds every candidate whose text exactly duplicates `target`.
///
/// "Exact" means the normalized edit-distance ratio is at its maximum, which
/// only identical text achieves. An empty result is a normal outcome.
pub fn find_exact_matches<'a>(target: &str, candidates: &'a [Goal]) -> ExactMatches<'a> {
    let matches: Vec<&Goal> = candidates
        .iter()
        .filter(|goal| is_exact(target, &goal.text))
        .collect();
    let count = matches.len();
    ExactMatches { matches, count }
}

/// Finds the `top_n` candidates most similar to `target` under the
/// token-set ratio.
///
/// Maintains a fixed working set of `top_n` slots, all placeholders at
/// first. Each candidate's score is compared against the current
/// lowest-scoring slot and replaces it only when strictly greater, so on a
/// tie the earliest-seen occupant keeps its place. With fewer than `top_n`
/// positively-scoring candidates the remaining slots stay placeholders, and
/// an empty candidate list yields `top_n` placeholders with a best score of
/// zero. Both are valid results, not errors.
pub fn find_most_similar<'a>(
    target: &str,
    candidates: &'a [Goal],
    top_n: usize,
) -> SimilarMatches<'a> {
    let mut top = vec![ScoredMatch::PLACEHOLDER; top_n];
    let mut best_score = 0;

    for goal in candidates {
        let score = token_set_ratio(target, &goal.text);
        best_score = best_score.max(score);

        // Lowest-scoring slot, earliest slot first on ties.
        let Some(weakest) = top
            .iter()
            .enumerate()
            .min_by_key(|(index, slot)| (slot.score, *index))
            .map(|(index, _)| index)
        else {
            continue; // top_n == 0
        };
        if score > top[weakest].score {
            top[weakest] = ScoredMatch {
                goal: Some(goal),
                score,
            };
        }
    }

    SimilarMatches { top, best_score }
}
