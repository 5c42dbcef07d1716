//! Error handling types and utilities.

use thiserror::Error;

/// A specialized Result type for bucketlist-insights operations.
pub type Result<T, E = InsightError> = std::result::Result<T, E>;

/// Precondition violations surfaced by the analytics entry points.
///
/// A no-match similarity result is a normal outcome (empty sequences, zero
/// scores), never an error; these variants cover the cases where an input
/// makes the requested computation meaningless.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InsightError {
    /// An hourly wage of zero or less cannot convert cost into hours.
    #[error("hourly wage must be positive, got {wage}")]
    NonPositiveWage { wage: f64 },

    /// Difficulty analysis over an empty goal list has no maximum to pick.
    #[error("goal list is empty")]
    EmptyGoalList,

    /// Every goal scored zero difficulty, so ratios against the total or
    /// average are undefined. Callers used to paper over this with a floor
    /// of 1; now they have to decide what to display.
    #[error("total difficulty of the goal list is zero")]
    ZeroTotalDifficulty,

    /// Population comparisons need at least one goal to compare against.
    #[error("global goal population is empty")]
    EmptyPopulation,

    /// The acting user's profile is missing or inconsistent planning data.
    #[error("profile is incomplete: {reason}")]
    InvalidProfile { reason: String },

    /// Growth and retirement rates must be positive.
    #[error("rate must be positive, got {rate}")]
    NonPositiveRate { rate: f64 },

    /// Retirement planning needs the retirement age to lie in the future.
    #[error("retirement age {retirement_age} is not after current age {age}")]
    RetirementBeforeCurrentAge { retirement_age: f64, age: f64 },
}

impl InsightError {
    pub(crate) fn invalid_profile(reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            reason: reason.into(),
        }
    }
}
