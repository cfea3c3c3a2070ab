//! Running account state carried from one month to the next

use super::{MonthlySnapshot, MILLION};

/// Balance, principal and milestone tracking for a projection in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionState {
    /// Last month applied (0 before any month is simulated)
    pub month: u32,
    /// Account balance
    pub total: f64,
    /// Cumulative principal
    pub invested: f64,
    /// First month the balance reached the million, if it has
    pub months_to_million: Option<u32>,
}

impl ProjectionState {
    /// State at month 0. An initial deposit of a million or more already counts
    /// as reached.
    pub fn new(initial: f64) -> Self {
        Self {
            month: 0,
            total: initial,
            invested: initial,
            months_to_million: (initial >= MILLION).then_some(0),
        }
    }

    /// Apply one month: interest on the opening balance, then the contribution.
    /// Contributions earn nothing in the month they are made.
    ///
    /// Returns the interest earned this month.
    pub fn advance(&mut self, monthly_rate: f64, contribution: f64) -> f64 {
        let interest = self.total * monthly_rate;
        self.total += interest + contribution;
        self.invested += contribution;
        self.month += 1;

        if self.months_to_million.is_none() && self.total >= MILLION {
            self.months_to_million = Some(self.month);
        }

        interest
    }

    /// Cumulative interest, always derived from balance and principal
    pub fn interest(&self) -> f64 {
        self.total - self.invested
    }

    pub fn snapshot(&self, interest_month: f64) -> MonthlySnapshot {
        MonthlySnapshot {
            month: self.month,
            year: self.month / 12,
            invested: self.invested,
            interest: self.interest(),
            total: self.total,
            interest_month,
        }
    }
}
