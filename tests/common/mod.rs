//! Shared fixtures for the integration suites.
//!
//! Goals are built with [`goal`]/[`typed_goal`] so tests state only the
//! attributes they care about; the standard [`planner`] profile is a
//! 30-year-old with 50 years ahead, $52k/yr earnings at a $25 wage.

use bucketlist_insights::{Goal, GoalType, Profile};
use chrono::{DateTime, Utc};
use rstest::fixture;

/// Fixed timestamp so goals compare deterministically.
pub fn published() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// A travel goal with the given text and costs.
pub fn goal(text: &str, cost: u32, time: u32, hours: u32) -> Goal {
    typed_goal(text, GoalType::Travel, cost, time, hours)
}

/// A goal with an explicit category.
pub fn typed_goal(text: &str, goal_type: GoalType, cost: u32, time: u32, hours: u32) -> Goal {
    Goal {
        text: text.to_string(),
        cost,
        time,
        hours,
        goal_type,
        crossed_off: false,
        published_at: published(),
    }
}

/// The standard test user.
#[allow(dead_code)] // Used in difficulty_test.rs and stats_test.rs
#[fixture]
pub fn planner() -> Profile {
    Profile {
        age: 30.0,
        life_expectancy: 80.0,
        yearly_earnings: 52_000.0,
        hourly_wage: 25.0,
        include_retirement: true,
        retirement_age: 65.0,
        retirement_savings: 20_000.0,
    }
}

/// A small but varied active-goal list.
#[allow(dead_code)] // Used in difficulty_test.rs and stats_test.rs
#[fixture]
pub fn sample_goals() -> Vec<Goal> {
    vec![
        goal("see the northern lights", 3_000, 7, 10),
        typed_goal("run a marathon", GoalType::ExerciseHealth, 150, 0, 200),
        typed_goal("build a kayak", GoalType::BuildingCreating, 800, 14, 60),
        typed_goal("learn italian", GoalType::Education, 200, 0, 300),
        goal("walk the camino", 2_500, 35, 0),
        typed_goal("buy a cabin", GoalType::Purchase, 95_000, 0, 0),
    ]
}
