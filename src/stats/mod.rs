//! Personal-finance-flavored statistics over a goal list.
//!
//! Everything here feeds the owner's dashboard: list totals, pacing against
//! the years they have left, salary-growth and retirement projections, and
//! a few deliberately silly spending comparisons.

mod categories;
mod conversions;
mod overview;
mod projections;
mod retirement;
mod timeline;

pub use categories::{AxisAverages, CategoryProfile, category_profile, category_profiles};
pub use conversions::SpendingEquivalents;
pub use overview::ListOverview;
pub use projections::{EarningsProjection, compound_earnings, growth_scenarios};
pub use retirement::{
    ANNUAL_INFLATION, RetirementPlan, inflate, retirement_plan, retirement_scenarios,
};
pub use timeline::{TimelineScenario, timeline_scenarios};
