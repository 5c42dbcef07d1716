//! Percentile comparison of one goal against the global goal population.

use serde::Serialize;

use crate::error::{InsightError, Result};
use crate::model::Goal;

/// Comparison of one attribute against the population.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisComparison {
    /// Percentage of the population strictly below the goal on this axis.
    pub percent_less_extreme: f64,
    /// Population mean of this attribute.
    pub population_average: f64,
    /// The goal's value divided by the population mean. Infinite when the
    /// mean is zero.
    pub ratio_to_average: f64,
}

/// Per-axis percentile standing of a goal among all active goals.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationComparison {
    pub population_size: usize,
    pub cost: AxisComparison,
    pub hours: AxisComparison,
    pub time: AxisComparison,
}

/// Compares `goal` (typically the owner's hardest) against every active
/// goal on the site, one attribute axis at a time.
pub fn compare_to_population(goal: &Goal, population: &[Goal]) -> Result<PopulationComparison> {
    if population.is_empty() {
        return Err(InsightError::EmptyPopulation);
    }

    Ok(PopulationComparison {
        population_size: population.len(),
        cost: axis(goal.cost, population, |g| g.cost),
        hours: axis(goal.hours, population, |g| g.hours),
        time: axis(goal.time, population, |g| g.time),
    })
}

fn axis(value: u32, population: &[Goal], attribute: impl Fn(&Goal) -> u32) -> AxisComparison {
    let below = population
        .iter()
        .filter(|other| attribute(other) < value)
        .count();
    let sum: u64 = population.iter().map(|g| u64::from(attribute(g))).sum();
    let population_average = sum as f64 / population.len() as f64;

    AxisComparison {
        percent_less_extreme: below as f64 / population.len() as f64 * 100.0,
        population_average,
        ratio_to_average: f64::from(value) / population_average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GoalType;
    use assert2::check;

    fn goal(cost: u32, time: u32, hours: u32) -> Goal {
        Goal {
            text: String::from("g"),
            cost,
            time,
            hours,
            goal_type: GoalType::Career,
            crossed_off: false,
            published_at: chrono::DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn percentiles_count_strictly_less_extreme_goals() {
        let population = vec![goal(10, 1, 0), goal(20, 2, 5), goal(30, 3, 5), goal(40, 4, 5)];
        let subject = goal(30, 1, 5);

        let comparison = compare_to_population(&subject, &population).unwrap();
        check!(comparison.population_size == 4);
        // Two goals cost strictly less than 30.
        check!(comparison.cost.percent_less_extreme == 50.0);
        check!(comparison.cost.population_average == 25.0);
        check!((comparison.cost.ratio_to_average - 1.2).abs() < 1e-12);
        // No goal has strictly fewer days than 1.
        check!(comparison.time.percent_less_extreme == 0.0);
        // One goal (hours == 0) sits strictly below 5.
        check!(comparison.hours.percent_less_extreme == 25.0);
    }

    #[test]
    fn zero_average_yields_an_infinite_ratio_not_a_panic() {
        let population = vec![goal(0, 1, 0), goal(0, 2, 0)];
        let subject = goal(10, 1, 0);
        let comparison = compare_to_population(&subject, &population).unwrap();
        check!(comparison.cost.population_average == 0.0);
        check!(comparison.cost.ratio_to_average.is_infinite());
    }

    #[test]
    fn empty_population_is_an_error() {
        let subject = goal(1, 1, 1);
        let result = compare_to_population(&subject, &[]);
        check!(result.unwrap_err() == InsightError::EmptyPopulation);
    }
}
