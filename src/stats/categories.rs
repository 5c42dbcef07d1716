//! Per-category comparison of a user's goals against everyone's.

use serde::Serialize;

use crate::model::{Goal, GoalType};

/// Mean cost/time/hours over some set of goals. All zero when the set is
/// empty, meaning "no data" rather than an error, since most users skip
/// some categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisAverages {
    pub cost: f64,
    pub time: f64,
    pub hours: f64,
}

impl AxisAverages {
    fn over<'a>(goals: impl Iterator<Item = &'a Goal>) -> Self {
        let mut count = 0u64;
        let (mut cost, mut time, mut hours) = (0u64, 0u64, 0u64);
        for goal in goals {
            count += 1;
            cost += u64::from(goal.cost);
            time += u64::from(goal.time);
            hours += u64::from(goal.hours);
        }
        if count == 0 {
            return Self::default();
        }
        Self {
            cost: cost as f64 / count as f64,
            time: time as f64 / count as f64,
            hours: hours as f64 / count as f64,
        }
    }
}

/// One category's standing: the user against the whole population.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProfile<'a> {
    pub goal_type: GoalType,
    pub population_average: AxisAverages,
    pub user_average: AxisAverages,
    pub user_goal_count: usize,
    /// The user's biggest goal in this category per axis; `None` when the
    /// user has no goals here. Ties go to the earliest goal.
    pub largest_by_cost: Option<&'a Goal>,
    pub largest_by_time: Option<&'a Goal>,
    pub largest_by_hours: Option<&'a Goal>,
}

/// Profiles a single category.
pub fn category_profile<'a>(
    goal_type: GoalType,
    user_goals: &'a [Goal],
    population: &[Goal],
) -> CategoryProfile<'a> {
    let users: Vec<&Goal> = user_goals
        .iter()
        .filter(|g| g.goal_type == goal_type)
        .collect();

    CategoryProfile {
        goal_type,
        population_average: AxisAverages::over(
            population.iter().filter(|g| g.goal_type == goal_type),
        ),
        user_average: AxisAverages::over(users.iter().copied()),
        user_goal_count: users.len(),
        largest_by_cost: largest(&users, |g| g.cost),
        largest_by_time: largest(&users, |g| g.time),
        largest_by_hours: largest(&users, |g| g.hours),
    }
}

/// Profiles every category, in the site's canonical order.
pub fn category_profiles<'a>(
    user_goals: &'a [Goal],
    population: &[Goal],
) -> Vec<CategoryProfile<'a>> {
    GoalType::ALL
        .iter()
        .map(|&goal_type| category_profile(goal_type, user_goals, population))
        .collect()
}

fn largest<'a>(goals: &[&'a Goal], attribute: impl Fn(&Goal) -> u32) -> Option<&'a Goal> {
    let mut best: Option<&Goal> = None;
    for &goal in goals {
        match best {
            Some(current) if attribute(goal) <= attribute(current) => {}
            _ => best = Some(goal),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn goal(goal_type: GoalType, cost: u32, time: u32, hours: u32) -> Goal {
        Goal {
            text: format!("{}-{}", goal_type, cost),
            cost,
            time,
            hours,
            goal_type,
            crossed_off: false,
            published_at: chrono::DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn averages_split_user_from_population() {
        let user = vec![
            goal(GoalType::Travel, 100, 10, 2),
            goal(GoalType::Travel, 300, 30, 4),
            goal(GoalType::Hobby, 50, 0, 0),
        ];
        let population = vec![
            goal(GoalType::Travel, 1_000, 1, 1),
            goal(GoalType::Travel, 3_000, 3, 3),
        ];

        let travel = category_profile(GoalType::Travel, &user, &population);
        check!(travel.user_goal_count == 2);
        check!(travel.user_average == AxisAverages { cost: 200.0, time: 20.0, hours: 3.0 });
        check!(
            travel.population_average == AxisAverages { cost: 2_000.0, time: 2.0, hours: 2.0 }
        );
        check!(travel.largest_by_cost.unwrap().cost == 300);
        check!(travel.largest_by_time.unwrap().time == 30);
    }

    #[test]
    fn empty_category_reports_no_data() {
        let career = category_profile(GoalType::Career, &[], &[]);
        check!(career.user_goal_count == 0);
        check!(career.user_average == AxisAverages::default());
        check!(career.largest_by_cost.is_none());
    }

    #[test]
    fn ties_keep_the_earliest_goal() {
        let user = vec![
            goal(GoalType::Hobby, 500, 1, 1),
            goal(GoalType::Hobby, 500, 9, 9),
        ];
        let hobby = category_profile(GoalType::Hobby, &user, &user);
        check!(std::ptr::eq(hobby.largest_by_cost.unwrap(), &user[0]));
    }

    #[test]
    fn all_twelve_categories_are_profiled() {
        let profiles = category_profiles(&[], &[]);
        check!(profiles.len() == 12);
        check!(profiles[0].goal_type == GoalType::Career);
        check!(profiles[11].goal_type == GoalType::Volunteering);
    }
}
