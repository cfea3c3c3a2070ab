//! Projection output: per-month snapshots and run summary

use super::{CHART_MONTHLY_POINT_LIMIT, MILLION};
use serde::{Deserialize, Serialize};

/// Account state at one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySnapshot {
    /// Month index, 0 = start
    pub month: u32,
    /// Whole years elapsed
    pub year: u32,
    /// Cumulative principal
    pub invested: f64,
    /// Cumulative interest (`total - invested`)
    pub interest: f64,
    /// Balance after this month's interest and contribution
    pub total: f64,
    /// Interest earned during this month only
    pub interest_month: f64,
}

/// Aggregates of a full run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_invested: f64,
    pub total_interest: f64,
    pub total_amount: f64,
    /// First month with a balance of at least a million
    pub months_to_million: Option<u32>,
}

impl SummaryStats {
    /// Gain over principal in percent, 0 when nothing was invested
    pub fn return_on_investment_pct(&self) -> f64 {
        if self.total_invested > 0.0 {
            (self.total_amount - self.total_invested) / self.total_invested * 100.0
        } else {
            0.0
        }
    }

    pub fn reached_million(&self) -> bool {
        self.months_to_million.is_some()
    }

    /// Share of the final balance that came from interest (0.0 to 1.0)
    pub fn interest_share(&self) -> f64 {
        if self.total_amount > 0.0 {
            self.total_interest / self.total_amount
        } else {
            0.0
        }
    }
}

/// Complete result of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// One snapshot per month, starting at month 0
    pub snapshots: Vec<MonthlySnapshot>,
    pub stats: SummaryStats,
}

impl ProjectionResult {
    pub fn final_snapshot(&self) -> &MonthlySnapshot {
        // Month 0 is always present
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Rows for the annual table: every anniversary month, plus the final month
    /// when the horizon ends mid-year. Month 0 is never listed.
    pub fn yearly_rows(&self) -> Vec<&MonthlySnapshot> {
        let mut rows: Vec<&MonthlySnapshot> = self
            .snapshots
            .iter()
            .filter(|s| s.month > 0 && s.month % 12 == 0)
            .collect();

        let last = self.final_snapshot();
        if last.month % 12 != 0 {
            rows.push(last);
        }
        rows
    }

    /// Points for the growth chart. Long runs keep only anniversary months
    /// plus the first and last snapshot.
    pub fn chart_points(&self) -> Vec<&MonthlySnapshot> {
        let count = self.snapshots.len();
        if count <= CHART_MONTHLY_POINT_LIMIT {
            return self.snapshots.iter().collect();
        }

        self.snapshots
            .iter()
            .enumerate()
            .filter(|(i, s)| *i == 0 || *i == count - 1 || s.month % 12 == 0)
            .map(|(_, s)| s)
            .collect()
    }

    /// Snapshot at the month the million was first reached
    pub fn million_snapshot(&self) -> Option<&MonthlySnapshot> {
        self.stats
            .months_to_million
            .and_then(|m| self.snapshots.get(m as usize))
            .filter(|s| s.total >= MILLION)
    }
}
