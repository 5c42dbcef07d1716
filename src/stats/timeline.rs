//! "What if I had more (or less) time" horizon scenarios.

use serde::Serialize;

use crate::error::{InsightError, Result};
use crate::model::{Goal, Profile};

/// Horizon adjustments the dashboard tabulates, in years.
const HORIZON_SHIFTS: [f64; 8] = [-20.0, -15.0, -10.0, -5.0, 5.0, 10.0, 15.0, 20.0];

/// The list's pacing if the user's end date moved by `shift_years`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineScenario {
    pub shift_years: f64,
    pub years_left: f64,
    pub cost_per_year: f64,
    pub days_per_goal: f64,
    pub days_per_year: f64,
    pub hours_per_month: f64,
}

/// Recomputes the core pacing numbers under each standard horizon shift.
///
/// Shifts that would leave no time at all are omitted rather than reported
/// with nonsense denominators; the result is ordered from the most
/// shortened horizon to the most extended.
pub fn timeline_scenarios(goals: &[Goal], profile: &Profile) -> Result<Vec<TimelineScenario>> {
    profile.validate()?;
    if goals.is_empty() {
        return Err(InsightError::EmptyGoalList);
    }

    let count = goals.len() as f64;
    let total_cost: f64 = goals.iter().map(|g| f64::from(g.cost)).sum();
    let total_days: f64 = goals.iter().map(|g| f64::from(g.time)).sum();
    let total_hours: f64 = goals.iter().map(|g| f64::from(g.hours)).sum();

    Ok(HORIZON_SHIFTS
        .iter()
        .filter_map(|&shift_years| {
            let years_left = profile.years_left() + shift_years;
            if years_left <= 0.0 {
                return None;
            }
            Some(TimelineScenario {
                shift_years,
                years_left,
                cost_per_year: total_cost / years_left,
                days_per_goal: years_left * 365.0 / count,
                days_per_year: total_days / years_left,
                hours_per_month: total_hours / years_left / 12.0,
            })
        })
        .collect())
}
