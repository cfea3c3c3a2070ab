//! Projection engine for monthly compounding with contributions

mod state;
mod engine;
mod snapshots;
pub mod batch;
pub mod export;

pub use state::ProjectionState;
pub use engine::{project, simulate};
pub use snapshots::{MonthlySnapshot, ProjectionResult, SummaryStats};
pub use batch::{project_batch, ScenarioSummary};

// ============================================================================
// Milestone
// ============================================================================
// The first million is the single milestone tracked by every projection.
// A balance exactly equal to it counts as reached.

/// Milestone balance in monetary units (R$ 1.000.000)
pub const MILLION: f64 = 1_000_000.0;

/// Charts switch from monthly to yearly points past this many snapshots
pub const CHART_MONTHLY_POINT_LIMIT: usize = 60;
