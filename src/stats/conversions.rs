//! Novelty "what else could you buy" conversions of the list's total cost.
//!
//! Pure fun for the dashboard footer. The unit prices are the site's
//! long-standing fixed constants; some figures go negative when the list
//! costs less than the comparison's buy-in, and the rendering layer leans
//! into the joke either way.

use serde::Serialize;

/// The list's total cost restated in questionable purchases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingEquivalents {
    /// Miles of dollar bills laid end to end ($10,320 per mile).
    pub miles_of_dollar_bills: f64,
    /// Years living in a $110-a-night hotel.
    pub years_in_hotel: f64,
    /// Years of a weekly $75 rose bouquet.
    pub years_of_weekly_roses: f64,
    /// Miles of dollar bills after first buying a $60,000 hot tub.
    pub miles_of_dollar_bills_after_hot_tub: f64,
    /// $300 trampolines after a $90,000 house down payment.
    pub trampolines_after_down_payment: f64,
    /// Friends brought along on an $800-a-head cruise.
    pub friends_on_a_cruise: f64,
    /// Height in miles of stacked quarters, after the hot tub again
    /// (4 quarters to the dollar, 0.069 inches each).
    pub miles_of_stacked_quarters: f64,
    /// Weeks at a $4,000 all-inclusive resort.
    pub resort_weeks: f64,
    /// Years of a daily $50 rose delivery.
    pub years_of_daily_roses: f64,
    /// Two-week $7,000 resort stays.
    pub resort_fortnights: f64,
    /// $500,000 gold bars.
    pub gold_bars: f64,
    /// $200,000 Lamborghini Gallardos.
    pub gallardos: f64,
    /// Years in a $550-a-night five-star hotel.
    pub years_in_five_star_hotel: f64,
    /// Million-dollar orcas.
    pub orcas: f64,
    /// Years of a daily $220 luxury bouquet.
    pub years_of_daily_bouquets: f64,
}

impl SpendingEquivalents {
    /// Restates a total cost in the site's standard set of comparisons.
    pub fn for_total_cost(total_cost: f64) -> Self {
        Self {
            miles_of_dollar_bills: total_cost / 10_320.0,
            years_in_hotel: total_cost / 110.0 / 365.0,
            years_of_weekly_roses: total_cost / 75.0 / 52.0,
            miles_of_dollar_bills_after_hot_tub: (total_cost - 60_000.0) / 10_320.0,
            trampolines_after_down_payment: (total_cost - 90_000.0) / 300.0,
            friends_on_a_cruise: total_cost / 800.0,
            miles_of_stacked_quarters: (total_cost - 60_000.0) * 4.0 * 0.069 / 12.0 / 5_280.0,
            resort_weeks: total_cost / 4_000.0,
            years_of_daily_roses: total_cost / 50.0 / 365.0,
            resort_fortnights: total_cost / 7_000.0,
            gold_bars: total_cost / 500_000.0,
            gallardos: total_cost / 200_000.0,
            years_in_five_star_hotel: total_cost / 550.0 / 365.0,
            orcas: total_cost / 1_000_000.0,
            years_of_daily_bouquets: total_cost / 220.0 / 365.0,
        }
    }
}
