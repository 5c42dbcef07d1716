//! Lifetime-earnings projections under annual salary growth.

use serde::Serialize;

use crate::error::Result;
use crate::model::Profile;

/// Annual raise rates the dashboard projects, 1% through 5%.
const RAISE_RATES: [f64; 5] = [0.01, 0.02, 0.03, 0.04, 0.05];

/// Earnings outlook for one assumed annual raise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsProjection {
    /// Assumed raise per year, as a decimal rate.
    pub annual_raise: f64,
    /// Salary in the final working year.
    pub final_year_salary: f64,
    /// Total earned over the remaining years.
    pub lifetime_earnings: f64,
    /// The bucket list's total cost as a percentage of lifetime earnings.
    pub list_cost_share: f64,
}

/// Compounds a salary year by year.
///
/// The current year is counted at today's salary; each of the `years` after
/// it compounds by `rate` before being added. Returns the lifetime total
/// and the final year's salary. Fractional years are truncated, matching a
/// year-granular planning horizon.
pub fn compound_earnings(rate: f64, yearly_earnings: f64, years: f64) -> (f64, f64) {
    let mut total = yearly_earnings;
    let mut salary = yearly_earnings;
    for _ in 0..years as u64 {
        salary *= 1.0 + rate;
        total += salary;
    }
    (total, salary)
}

/// Projects lifetime earnings for each standard raise rate and relates the
/// list's total cost to each outcome.
///
/// The horizon is the profile's working years: capped at retirement when
/// the user plans around one, otherwise life expectancy.
pub fn growth_scenarios(total_cost: f64, profile: &Profile) -> Result<Vec<EarningsProjection>> {
    profile.validate()?;
    let years = profile.adjusted_years_left();

    Ok(RAISE_RATES
        .iter()
        .map(|&annual_raise| {
            let (lifetime_earnings, final_year_salary) =
                compound_earnings(annual_raise, profile.yearly_earnings, years);
            EarningsProjection {
                annual_raise,
                final_year_salary,
                lifetime_earnings,
                list_cost_share: total_cost / lifetime_earnings * 100.0,
            }
        })
        .collect())
}
