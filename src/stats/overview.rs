//! Whole-list totals and pacing statistics.

use serde::Serialize;

use crate::error::{InsightError, Result};
use crate::model::{Goal, Profile};

/// The at-a-glance numbers at the top of the stats dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOverview {
    pub goal_count: usize,
    pub total_cost: f64,
    pub total_days: f64,
    pub total_hours: f64,

    pub years_left: f64,
    pub days_left: f64,
    /// Hours the user works in a typical week, from earnings and wage.
    pub work_hours_per_week: f64,

    /// Goals that must be finished per year to clear the list in time.
    pub accomplish_per_year: f64,
    /// Remaining days divided evenly across the goals.
    pub days_per_goal: f64,
    pub cost_per_year: f64,
    pub days_per_year: f64,
    pub hours_per_year: f64,
    pub hours_per_month: f64,
    pub hours_per_week: f64,
    pub average_goal_cost: f64,
    /// Yearly list spending as a percentage of yearly earnings.
    pub percent_of_yearly_earnings: f64,
    /// Earnings left each year after funding the list.
    pub annual_salary_left: f64,
}

impl ListOverview {
    /// Computes the overview for a user's active goals.
    ///
    /// Requires a [valid](Profile::validate) profile and a non-empty list.
    pub fn compute(goals: &[Goal], profile: &Profile) -> Result<Self> {
        profile.validate()?;
        if goals.is_empty() {
            return Err(InsightError::EmptyGoalList);
        }

        let goal_count = goals.len();
        let count = goal_count as f64;
        let total_cost: f64 = goals.iter().map(|g| f64::from(g.cost)).sum();
        let total_days: f64 = goals.iter().map(|g| f64::from(g.time)).sum();
        let total_hours: f64 = goals.iter().map(|g| f64::from(g.hours)).sum();

        let years_left = profile.years_left();
        let days_left = profile.days_left();
        let hours_per_year = total_hours / years_left;
        let cost_per_year = total_cost / years_left;
        let percent_of_yearly_earnings = cost_per_year / profile.yearly_earnings * 100.0;

        Ok(Self {
            goal_count,
            total_cost,
            total_days,
            total_hours,
            years_left,
            days_left,
            work_hours_per_week: profile.yearly_earnings / profile.hourly_wage / 52.0,
            accomplish_per_year: count / years_left,
            days_per_goal: days_left / count,
            cost_per_year,
            days_per_year: total_days / years_left,
            hours_per_year,
            hours_per_month: hours_per_year / 12.0,
            hours_per_week: hours_per_year / 52.0,
            average_goal_cost: total_cost / count,
            percent_of_yearly_earnings,
            annual_salary_left: profile.yearly_earnings
                - profile.yearly_earnings * percent_of_yearly_earnings / 100.0,
        })
    }
}
