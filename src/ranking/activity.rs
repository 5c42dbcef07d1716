//! Weighted site-activity scoring.

use crate::model::ActivityCounts;

/// Collapses a user's activity tallies into a single score.
///
/// Weights are deliberate: attracting a comment from someone else (×5) is
/// worth more than writing one (×2), which is worth more than publishing or
/// finishing a goal (×1 each).
pub fn activity_score(counts: ActivityCounts) -> u64 {
    counts.comments_received * 5
        + counts.comments_written * 2
        + counts.goals_published
        + counts.goals_crossed_off
}

/// Scores every `(label, counts)` pair and returns them highest first.
///
/// The sort is stable, so equally-active users keep their input order.
pub fn rank_by_activity<'a>(users: &'a [(String, ActivityCounts)]) -> Vec<(&'a str, u64)> {
    let mut ranked: Vec<(&str, u64)> = users
        .iter()
        .map(|(label, counts)| (label.as_str(), activity_score(*counts)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
