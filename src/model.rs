//! Input types shared by the similarity and ranking engines.
//!
//! Nothing in this crate creates, mutates, or persists these records; the
//! storage layer above owns their lifecycle and hands them in by reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{InsightError, Result};

/// A single bucket-list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Short label, e.g. "visit the pyramids".
    pub text: String,
    /// Monetary cost in whole currency units.
    pub cost: u32,
    /// Elapsed time the goal takes, in days.
    pub time: u32,
    /// Explicit hours of effort on top of the elapsed days.
    pub hours: u32,
    pub goal_type: GoalType,
    pub crossed_off: bool,
    pub published_at: DateTime<Utc>,
}

/// The fixed set of goal categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalType {
    Career,
    Purchase,
    Travel,
    ExtremeSport,
    FamilySocial,
    Relationship,
    ExerciseHealth,
    ImprovingSkill,
    Hobby,
    BuildingCreating,
    Education,
    Volunteering,
}

impl GoalType {
    /// All categories, in the order the original site listed them.
    pub const ALL: [Self; 12] = [
        Self::Career,
        Self::Purchase,
        Self::Travel,
        Self::ExtremeSport,
        Self::FamilySocial,
        Self::Relationship,
        Self::ExerciseHealth,
        Self::ImprovingSkill,
        Self::Hobby,
        Self::BuildingCreating,
        Self::Education,
        Self::Volunteering,
    ];

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Career => "Career",
            Self::Purchase => "Purchase",
            Self::Travel => "Travel",
            Self::ExtremeSport => "Extreme Sport",
            Self::FamilySocial => "Family/Social",
            Self::Relationship => "Relationship",
            Self::ExerciseHealth => "Exercise/Health",
            Self::ImprovingSkill => "Improving a Skill",
            Self::Hobby => "Hobby",
            Self::BuildingCreating => "Building/Creating Something",
            Self::Education => "Education/Self Improvement",
            Self::Volunteering => "Volunteering",
        }
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The acting user's planning inputs.
///
/// Passed explicitly into every operation that needs them; there is no
/// ambient "current user" anywhere in this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub age: f64,
    pub life_expectancy: f64,
    pub yearly_earnings: f64,
    pub hourly_wage: f64,
    pub include_retirement: bool,
    pub retirement_age: f64,
    pub retirement_savings: f64,
}

impl Profile {
    /// Years between now and the user's life expectancy.
    pub fn years_left(&self) -> f64 {
        self.life_expectancy - self.age
    }

    /// Remaining days, at 365 per year.
    pub fn days_left(&self) -> f64 {
        self.years_left() * 365.0
    }

    /// Years left, capped at the retirement age when the user plans
    /// around retirement and retires before their life expectancy.
    pub fn adjusted_years_left(&self) -> f64 {
        if self.include_retirement && self.life_expectancy > self.retirement_age {
            self.retirement_age - self.age
        } else {
            self.years_left()
        }
    }

    /// Checks that the profile carries enough data to plan with.
    ///
    /// Mirrors the gating the original site applied before showing any
    /// statistics: a default-initialized profile (zero age, expectancy, or
    /// earnings) or one with no future left is rejected.
    pub fn validate(&self) -> Result<()> {
        if self.age <= 0.0 {
            return Err(InsightError::invalid_profile("age is not set"));
        }
        if self.life_expectancy <= 0.0 {
            return Err(InsightError::invalid_profile("life expectancy is not set"));
        }
        if self.yearly_earnings <= 0.0 {
            return Err(InsightError::invalid_profile("yearly earnings are not set"));
        }
        if self.hourly_wage <= 0.0 {
            return Err(InsightError::NonPositiveWage {
                wage: self.hourly_wage,
            });
        }
        if self.years_left() < 1.0 {
            return Err(InsightError::invalid_profile(
                "life expectancy leaves less than a year",
            ));
        }
        if self.include_retirement && self.retirement_age - self.age < 1.0 {
            return Err(InsightError::invalid_profile(
                "retirement age leaves less than a year",
            ));
        }
        Ok(())
    }
}

/// Per-user activity tallies, precomputed by the storage layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCounts {
    /// Goals the user has published.
    pub goals_published: u64,
    /// Of those, how many are crossed off.
    pub goals_crossed_off: u64,
    /// Comments the user wrote anywhere on the site.
    pub comments_written: u64,
    /// Comments other users left on this user's goals.
    pub comments_received: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    fn profile() -> Profile {
        Profile {
            age: 30.0,
            life_expectancy: 80.0,
            yearly_earnings: 50_000.0,
            hourly_wage: 25.0,
            include_retirement: true,
            retirement_age: 65.0,
            retirement_savings: 10_000.0,
        }
    }

    #[test]
    fn valid_profile_passes() {
        check!(profile().validate() == Ok(()));
        check!(profile().years_left() == 50.0);
        check!(profile().adjusted_years_left() == 35.0);
    }

    #[test]
    fn retirement_cap_only_applies_when_included() {
        let mut p = profile();
        p.include_retirement = false;
        check!(p.adjusted_years_left() == 50.0);
    }

    #[rstest]
    #[case(|p: &mut Profile| p.age = 0.0)]
    #[case(|p: &mut Profile| p.life_expectancy = 0.0)]
    #[case(|p: &mut Profile| p.yearly_earnings = 0.0)]
    #[case(|p: &mut Profile| p.life_expectancy = p.age + 0.5)]
    #[case(|p: &mut Profile| p.retirement_age = p.age)]
    fn incomplete_profile_rejected(#[case] mutate: fn(&mut Profile)) {
        let mut p = profile();
        mutate(&mut p);
        check!(p.validate().is_err());
    }

    #[test]
    fn zero_wage_is_the_wage_error() {
        let mut p = profile();
        p.hourly_wage = 0.0;
        check!(p.validate() == Err(InsightError::NonPositiveWage { wage: 0.0 }));
    }

    #[test]
    fn labels_round_trip_display() {
        check!(GoalType::BuildingCreating.to_string() == "Building/Creating Something");
        check!(GoalType::ALL.len() == 12);
    }
}
