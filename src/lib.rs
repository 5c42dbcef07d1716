//! Goal similarity matching and difficulty analytics for bucket-list
//! applications.
//!
//! Every operation in this crate is a pure, synchronous function over
//! collections the caller has already materialized. The web layer above owns
//! persistence, sessions, and rendering; it hands goal lists and the acting
//! user's [`Profile`] in and receives typed, serializable result structs back.

pub mod error;
pub mod logging;
pub mod model;
pub mod ranking;
pub mod similarity;
pub mod stats;

pub use error::{InsightError, Result};
pub use model::{ActivityCounts, Goal, GoalType, Profile};
pub use ranking::{DifficultyAnalysis, PopulationComparison};
pub use similarity::{ExactMatches, SearchHit, SimilarMatches};
pub use stats::ListOverview;
