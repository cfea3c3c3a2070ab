//! Month-by-month compounding simulation

use super::{MonthlySnapshot, ProjectionResult, ProjectionState, SummaryStats};
use crate::inputs::{month_count, PeriodType, ProjectionInputs, RateType, DEFAULT_MAX_MONTHS};

/// Project an initial deposit plus monthly contributions.
///
/// `rate` is a nominal percentage in `rate_type` units and `period` a horizon
/// in `period_type` units. Fractional horizons are truncated to whole months.
/// The result always holds month 0 followed by one snapshot per simulated month.
///
/// Runtime and memory grow with the horizon and nothing here bounds it. Callers
/// taking untrusted input should run `ProjectionInputs::validate` first.
pub fn project(
    initial: f64,
    monthly: f64,
    rate: f64,
    rate_type: RateType,
    period: f64,
    period_type: PeriodType,
) -> ProjectionResult {
    let months = month_count(period_type.total_months(period));
    let monthly_rate = rate_type.monthly_rate(rate);
    simulate(initial, monthly, monthly_rate, months)
}

impl ProjectionInputs {
    /// Run the projection for these inputs
    pub fn project(&self) -> ProjectionResult {
        project(
            self.initial,
            self.monthly,
            self.rate,
            self.rate_type,
            self.period,
            self.period_type,
        )
    }
}

/// Core loop on normalized units: a decimal monthly rate and a month count
pub fn simulate(initial: f64, monthly: f64, monthly_rate: f64, months: u32) -> ProjectionResult {
    log::debug!(
        "Projecting {} months: initial={:.2}, monthly={:.2}, monthly_rate={:.8}",
        months, initial, monthly, monthly_rate
    );

    let mut state = ProjectionState::new(initial);
    // Only a hint: longer horizons grow the vector as they go
    let capacity = months.min(DEFAULT_MAX_MONTHS) as usize + 1;
    let mut snapshots: Vec<MonthlySnapshot> = Vec::with_capacity(capacity);
    snapshots.push(state.snapshot(0.0));

    for _ in 0..months {
        let interest_month = state.advance(monthly_rate, monthly);
        snapshots.push(state.snapshot(interest_month));
    }

    let stats = SummaryStats {
        total_invested: state.invested,
        total_interest: state.interest(),
        total_amount: state.total,
        months_to_million: state.months_to_million,
    };

    if let Some(month) = stats.months_to_million {
        log::debug!("Million reached at month {}", month);
    }

    ProjectionResult { snapshots, stats }
}
