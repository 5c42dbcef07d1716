//! Per-goal difficulty scoring and whole-list ranking.
//!
//! Difficulty is an hours-equivalent scalar: elapsed days are converted at
//! 17 waking hours per day, monetary cost is converted through the owner's
//! hourly wage, and explicit hours count as themselves. One unit, three
//! inputs, so every goal on a list becomes comparable.

use serde::Serialize;

use crate::error::{InsightError, Result};
use crate::model::Goal;

/// Hours of a day treated as usable, leaving out sleep and standing
/// obligations.
const WAKING_HOURS_PER_DAY: f64 = 17.0;

/// A goal paired with its computed difficulty.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedGoal<'a> {
    pub goal: &'a Goal,
    pub difficulty: f64,
}

/// Full comparative analysis of one user's active goals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyAnalysis<'a> {
    pub total_difficulty: f64,
    pub average_difficulty: f64,
    /// The single hardest goal; on equal difficulty the earliest in the
    /// input wins.
    pub most_difficult: RankedGoal<'a>,
    /// Index of `most_difficult` in the input slice.
    pub most_difficult_index: usize,
    /// The hardest goal's share of the total difficulty, as a percentage.
    pub most_difficult_share_of_total: f64,
    /// How many times harder than the average goal the hardest one is.
    pub most_difficult_vs_average: f64,
    /// Years of the owner's remaining time budget attributable to the
    /// hardest goal, proportional to its difficulty share.
    pub years_for_most_difficult: f64,
    /// Every goal, hardest first; ties keep input order.
    pub hardest_to_easiest: Vec<RankedGoal<'a>>,
}

impl<'a> DifficultyAnalysis<'a> {
    /// The `n` hardest goals (fewer when the list is shorter).
    pub fn top_hardest(&self, n: usize) -> &[RankedGoal<'a>] {
        &self.hardest_to_easiest[..n.min(self.hardest_to_easiest.len())]
    }

    /// The `n` easiest goals, easiest first.
    pub fn top_easiest(&self, n: usize) -> Vec<RankedGoal<'a>> {
        self.hardest_to_easiest
            .iter()
            .rev()
            .take(n)
            .copied()
            .collect()
    }
}

/// Computes a single goal's difficulty in hours-equivalent units.
///
/// Fails with [`InsightError::NonPositiveWage`] instead of dividing by a
/// meaningless wage.
pub fn difficulty(goal: &Goal, hourly_wage: f64) -> Result<f64> {
    ensure_positive_wage(hourly_wage)?;
    Ok(score(goal, hourly_wage))
}

fn ensure_positive_wage(hourly_wage: f64) -> Result<()> {
    if hourly_wage > 0.0 {
        Ok(())
    } else {
        Err(InsightError::NonPositiveWage { wage: hourly_wage })
    }
}

/// Difficulty with the wage already validated.
fn score(goal: &Goal, hourly_wage: f64) -> f64 {
    f64::from(goal.time) * WAKING_HOURS_PER_DAY
        + f64::from(goal.cost) / hourly_wage
        + f64::from(goal.hours)
}

/// Ranks a user's active goals and derives the comparative statistics for
/// the hardest one.
///
/// `years_left` is the owner's remaining time budget (the caller derives it
/// from the profile). Preconditions are explicit errors: a non-positive
/// wage, an empty list, or a list whose total difficulty is zero, since
/// every later ratio divides by that total or the derived average.
pub fn analyze<'a>(
    goals: &'a [Goal],
    hourly_wage: f64,
    years_left: f64,
) -> Result<DifficultyAnalysis<'a>> {
    ensure_positive_wage(hourly_wage)?;
    if goals.is_empty() {
        return Err(InsightError::EmptyGoalList);
    }

    let scored: Vec<RankedGoal<'a>> = goals
        .iter()
        .map(|goal| RankedGoal {
            goal,
            difficulty: score(goal, hourly_wage),
        })
        .collect();

    let total_difficulty: f64 = scored.iter().map(|ranked| ranked.difficulty).sum();
    if total_difficulty == 0.0 {
        return Err(InsightError::ZeroTotalDifficulty);
    }
    let average_difficulty = total_difficulty / scored.len() as f64;

    // Strictly-greater comparison keeps the earliest goal on ties.
    let mut most_difficult_index = 0;
    for (index, ranked) in scored.iter().enumerate() {
        if ranked.difficulty > scored[most_difficult_index].difficulty {
            most_difficult_index = index;
        }
    }
    let most_difficult = scored[most_difficult_index];

    let most_difficult_share_of_total = most_difficult.difficulty / total_difficulty * 100.0;
    let most_difficult_vs_average = most_difficult.difficulty / average_difficulty;
    let years_for_most_difficult = most_difficult_share_of_total * years_left / 100.0;

    // Stable sort: equal difficulties stay in input order.
    let mut hardest_to_easiest = scored;
    hardest_to_easiest.sort_by(|a, b| b.difficulty.total_cmp(&a.difficulty));

    tracing::debug!(
        goals = hardest_to_easiest.len(),
        total = total_difficulty,
        hardest = %most_difficult.goal.text,
        "ranked goal list by difficulty"
    );

    Ok(DifficultyAnalysis {
        total_difficulty,
        average_difficulty,
        most_difficult,
        most_difficult_index,
        most_difficult_share_of_total,
        most_difficult_vs_average,
        years_for_most_difficult,
        hardest_to_easiest,
    })
}
