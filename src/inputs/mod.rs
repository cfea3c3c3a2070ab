//! Projection inputs, unit enums and boundary parsing
//!
//! The engine trusts whatever it is given. Everything in here that can fail
//! (text parsing, validation, CSV loading) runs before the engine is invoked.

mod rate;
mod period;
pub mod currency;
pub mod loader;

pub use rate::RateType;
pub use period::{month_count, PeriodType};
pub use currency::{mask_currency_input, parse_currency_input, parse_number_input};
pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};

use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// Longest horizon accepted at the boundary (100 years)
pub const DEFAULT_MAX_MONTHS: u32 = 1200;

/// Parameters of a single projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInputs {
    /// Balance at month 0
    #[serde(default)]
    pub initial: f64,

    /// Contribution added at the end of every month
    #[serde(default = "default_monthly")]
    pub monthly: f64,

    /// Nominal rate in percent (10.0 = 10%)
    #[serde(default = "default_rate")]
    pub rate: f64,

    #[serde(default)]
    pub rate_type: RateType,

    /// Horizon length in `period_type` units
    #[serde(default = "default_period")]
    pub period: f64,

    #[serde(default)]
    pub period_type: PeriodType,
}

fn default_monthly() -> f64 { 500.0 }
fn default_rate() -> f64 { 10.0 }
fn default_period() -> f64 { 30.0 }

impl Default for ProjectionInputs {
    fn default() -> Self {
        Self {
            initial: 0.0,
            monthly: 500.0,
            rate: 10.0,
            rate_type: RateType::Yearly,
            period: 30.0,
            period_type: PeriodType::Years,
        }
    }
}

impl ProjectionInputs {
    /// Horizon in months before truncation
    pub fn total_months(&self) -> f64 {
        self.period_type.total_months(self.period)
    }

    /// Number of simulated months after month 0
    pub fn month_count(&self) -> u32 {
        month_count(self.total_months())
    }

    /// Effective monthly decimal rate
    pub fn monthly_rate(&self) -> f64 {
        self.rate_type.monthly_rate(self.rate)
    }

    /// Check the inputs before handing them to the engine.
    ///
    /// Withdrawals (negative `monthly`) and negative rates are accepted and
    /// simulated as given. A yearly rate at or below -100% is rejected since it
    /// has no real monthly equivalent.
    pub fn validate(&self, max_months: u32) -> Result<()> {
        let fields = [
            ("initial", self.initial),
            ("monthly", self.monthly),
            ("rate", self.rate),
            ("period", self.period),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ProjectionError::NonFinite { name, value });
            }
        }

        if self.period < 0.0 {
            return Err(ProjectionError::NegativePeriod(self.period));
        }

        if self.rate_type == RateType::Yearly && self.rate <= -100.0 {
            return Err(ProjectionError::RateBelowTotalLoss(self.rate));
        }

        let months = self.total_months();
        if months > max_months as f64 {
            return Err(ProjectionError::HorizonTooLong { months, limit: max_months });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_starting_form() {
        let inputs = ProjectionInputs::default();
        assert_eq!(inputs.initial, 0.0);
        assert_eq!(inputs.monthly, 500.0);
        assert_eq!(inputs.rate, 10.0);
        assert_eq!(inputs.rate_type, RateType::Yearly);
        assert_eq!(inputs.period, 30.0);
        assert_eq!(inputs.period_type, PeriodType::Years);
        assert_eq!(inputs.month_count(), 360);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let inputs: ProjectionInputs =
            serde_json::from_str(r#"{"initial": 2500.0, "periodType": "months", "period": 18}"#)
                .expect("Failed to parse");
        assert_eq!(inputs.initial, 2500.0);
        assert_eq!(inputs.monthly, 500.0);
        assert_eq!(inputs.period_type, PeriodType::Months);
        assert_eq!(inputs.month_count(), 18);

        let empty: ProjectionInputs = serde_json::from_str("{}").expect("Failed to parse");
        assert_eq!(empty, ProjectionInputs::default());
    }

    #[test]
    fn test_validate_accepts_withdrawals_and_negative_rates() {
        let inputs = ProjectionInputs {
            monthly: -200.0,
            rate: -3.0,
            ..Default::default()
        };
        assert!(inputs.validate(DEFAULT_MAX_MONTHS).is_ok());
    }

    #[test]
    fn test_validate_rejections() {
        let nan = ProjectionInputs { rate: f64::NAN, ..Default::default() };
        assert!(matches!(
            nan.validate(DEFAULT_MAX_MONTHS),
            Err(ProjectionError::NonFinite { name: "rate", .. })
        ));

        let negative = ProjectionInputs { period: -1.0, ..Default::default() };
        assert!(matches!(
            negative.validate(DEFAULT_MAX_MONTHS),
            Err(ProjectionError::NegativePeriod(_))
        ));

        let wiped_out = ProjectionInputs { rate: -100.0, ..Default::default() };
        assert!(matches!(
            wiped_out.validate(DEFAULT_MAX_MONTHS),
            Err(ProjectionError::RateBelowTotalLoss(_))
        ));

        // -100% a month is allowed: the balance simply drops to the contribution
        let monthly_loss = ProjectionInputs {
            rate: -100.0,
            rate_type: RateType::Monthly,
            ..Default::default()
        };
        assert!(monthly_loss.validate(DEFAULT_MAX_MONTHS).is_ok());

        let too_long = ProjectionInputs { period: 101.0, ..Default::default() };
        assert!(matches!(
            too_long.validate(DEFAULT_MAX_MONTHS),
            Err(ProjectionError::HorizonTooLong { limit: 1200, .. })
        ));
        assert!(too_long.validate(2000).is_ok());
    }
}
