//! Retirement saving and inflation arithmetic.

use serde::Serialize;

use crate::error::{InsightError, Result};
use crate::model::Profile;

/// Long-run inflation assumption used to project today's money forward.
pub const ANNUAL_INFLATION: f64 = 0.03;

/// Withdrawal/return rates the dashboard tabulates, 4% through 9%.
const APR_SCENARIOS: [f64; 6] = [0.04, 0.05, 0.06, 0.07, 0.08, 0.09];

/// A retirement saving plan at one assumed rate of return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementPlan {
    /// Assumed annual rate of return, as a decimal.
    pub rate: f64,
    /// Nest egg needed for the target retirement income at this rate.
    pub amount_needed: f64,
    /// Required savings per year between now and retirement.
    pub save_per_year: f64,
    /// `save_per_year` as a percentage of current yearly earnings.
    pub percent_of_yearly_earnings: f64,
    /// The above plus the bucket list's own yearly share of earnings.
    pub percent_with_goals: f64,
}

/// What `amount` of today's money costs after `years` of inflation.
pub fn inflate(amount: f64, years: f64) -> f64 {
    (1.0 + ANNUAL_INFLATION).powf(years) * amount
}

/// Computes the nest egg and yearly savings required to retire on an
/// inflation-adjusted version of the user's current earnings.
///
/// The target income is `yearly_earnings` inflated to the retirement year.
/// The nest egg sustains that income as a perpetuity at `rate`; current
/// savings compound until retirement, and the shortfall is spread over the
/// remaining years with the standard annuity factor.
pub fn retirement_plan(profile: &Profile, rate: f64) -> Result<(f64, f64)> {
    if rate <= 0.0 {
        return Err(InsightError::NonPositiveRate { rate });
    }
    if profile.retirement_age <= profile.age {
        return Err(InsightError::RetirementBeforeCurrentAge {
            retirement_age: profile.retirement_age,
            age: profile.age,
        });
    }

    let years_to_retirement = profile.retirement_age - profile.age;
    let retirement_income = inflate(profile.yearly_earnings, years_to_retirement);

    let amount_needed = retirement_income / rate;
    let growth = (1.0 + rate).powf(years_to_retirement);
    let savings_at_retirement = profile.retirement_savings * growth;
    let annuity_factor = (growth - 1.0) / rate;
    let save_per_year = (amount_needed - savings_at_retirement) / annuity_factor;

    Ok((amount_needed, save_per_year))
}

/// Tabulates [`retirement_plan`] across the standard 4–9% rates.
///
/// `goal_cost_percent` is the list's yearly share of earnings (from the
/// overview), folded into each row's combined percentage.
pub fn retirement_scenarios(
    profile: &Profile,
    goal_cost_percent: f64,
) -> Result<Vec<RetirementPlan>> {
    profile.validate()?;
    APR_SCENARIOS
        .iter()
        .map(|&rate| {
            let (amount_needed, save_per_year) = retirement_plan(profile, rate)?;
            let percent_of_yearly_earnings = save_per_year / profile.yearly_earnings * 100.0;
            Ok(RetirementPlan {
                rate,
                amount_needed,
                save_per_year,
                percent_of_yearly_earnings,
                percent_with_goals: percent_of_yearly_earnings + goal_cost_percent,
            })
        })
        .collect()
}
