//! Horizon units

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Unit of the projection horizon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    #[default]
    #[serde(alias = "anos")]
    Years,
    #[serde(alias = "meses")]
    Months,
}

impl PeriodType {
    /// Horizon length in months, possibly fractional
    pub fn total_months(self, period: f64) -> f64 {
        match self {
            PeriodType::Years => period * 12.0,
            PeriodType::Months => period,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PeriodType::Years => "anos",
            PeriodType::Months => "meses",
        }
    }
}

/// Number of simulated months for a horizon.
///
/// Fractional horizons are truncated; negative or NaN horizons simulate nothing
/// beyond month 0.
pub fn month_count(total_months: f64) -> u32 {
    if total_months.is_nan() || total_months <= 0.0 {
        return 0;
    }
    // Saturates at u32::MAX for absurd horizons
    total_months.floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_months() {
        assert_eq!(PeriodType::Years.total_months(30.0), 360.0);
        assert_eq!(PeriodType::Years.total_months(2.5), 30.0);
        assert_eq!(PeriodType::Months.total_months(7.0), 7.0);
        assert_eq!(PeriodType::Years.total_months(0.0), 0.0);
    }

    #[test]
    fn test_month_count_truncates() {
        assert_eq!(month_count(5.5), 5);
        assert_eq!(month_count(5.999), 5);
        assert_eq!(month_count(12.0), 12);
        assert_eq!(month_count(0.4), 0);
    }

    #[test]
    fn test_month_count_degenerate() {
        assert_eq!(month_count(0.0), 0);
        assert_eq!(month_count(-3.0), 0);
        assert_eq!(month_count(f64::NAN), 0);
    }
}
