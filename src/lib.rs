//! Compound-interest projection toward a first million
//!
//! Projects the month-by-month growth of an initial deposit plus fixed monthly
//! contributions, reports when (if ever) the balance crosses R$ 1.000.000 and
//! prepares the trajectory for tables, charts and pt-BR display.

pub mod display;
pub mod error;
pub mod inputs;
pub mod projection;

pub use error::{ProjectionError, Result};
pub use inputs::{PeriodType, ProjectionInputs, RateType};
pub use projection::{project, MonthlySnapshot, ProjectionResult, SummaryStats, MILLION};
