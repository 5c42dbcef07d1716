//! Site-wide search ranking over goals and usernames.

use serde::Serialize;

use crate::model::Goal;

use super::scoring::token_set_ratio;

/// Default number of hits returned by [`rank`].
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// A single ranked search hit.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum SearchHit<'a> {
    Goal { goal: &'a Goal, score: u32 },
    User { username: &'a str, score: u32 },
}

impl SearchHit<'_> {
    pub fn score(&self) -> u32 {
        match self {
            Self::Goal { score, .. } | Self::User { score, .. } => *score,
        }
    }
}

/// Ranks every goal text and username against `query` and returns the top
/// `limit` hits, highest score first.
///
/// The sort is stable, so equally-scoring hits keep their input order and
/// goals (scored first) outrank users on ties.
pub fn rank<'a>(
    query: &str,
    goals: &'a [Goal],
    usernames: &'a [String],
    limit: usize,
) -> Vec<SearchHit<'a>> {
    let mut hits: Vec<SearchHit<'a>> = Vec::with_capacity(goals.len() + usernames.len());
    hits.extend(goals.iter().map(|goal| SearchHit::Goal {
        goal,
        score: token_set_ratio(query, &goal.text),
    }));
    hits.extend(usernames.iter().map(|username| SearchHit::User {
        username,
        score: token_set_ratio(query, username),
    }));

    hits.sort_by(|a, b| b.score().cmp(&a.score()));
    hits.truncate(limit);
    hits
}
