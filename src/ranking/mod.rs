//! Difficulty scoring and comparative ranking of goal collections.

mod activity;
mod difficulty;
mod population;

pub use activity::{activity_score, rank_by_activity};
pub use difficulty::{DifficultyAnalysis, RankedGoal, analyze, difficulty};
pub use population::{AxisComparison, PopulationComparison, compare_to_population};
