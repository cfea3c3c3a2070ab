//! Interest rate units and normalization to an effective monthly rate

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Whether a nominal rate is quoted per year or per month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    #[default]
    #[serde(alias = "anual")]
    Yearly,
    #[serde(alias = "mensal")]
    Monthly,
}

impl RateType {
    /// Convert a nominal rate in percent (10.0 = 10%) to the monthly decimal rate
    /// applied at each compounding step.
    ///
    /// A yearly rate is read as compound annual growth reached through 12 equal
    /// monthly steps: `(1 + r)^(1/12) - 1`, not `r / 12`. A monthly rate is used
    /// as-is.
    pub fn monthly_rate(self, rate_pct: f64) -> f64 {
        let rate = rate_pct / 100.0;
        match self {
            RateType::Yearly => (1.0 + rate).powf(1.0 / 12.0) - 1.0,
            RateType::Monthly => rate,
        }
    }

    /// Annual growth produced by compounding the monthly rate 12 times
    pub fn effective_annual_rate(self, rate_pct: f64) -> f64 {
        (1.0 + self.monthly_rate(rate_pct)).powi(12) - 1.0
    }

    /// Portuguese label as shown next to the rate field
    pub fn label(self) -> &'static str {
        match self {
            RateType::Yearly => "ao ano",
            RateType::Monthly => "ao mês",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_yearly_rate_compounds_back_to_annual() {
        let monthly = RateType::Yearly.monthly_rate(10.0);
        assert_relative_eq!((1.0 + monthly).powi(12), 1.10, epsilon = 1e-12);

        // Strictly less than simple division by 12
        assert!(monthly < 0.10 / 12.0);
        assert!((monthly - 0.007974140428903764).abs() < 1e-12);
    }

    #[test]
    fn test_monthly_rate_passes_through() {
        assert_eq!(RateType::Monthly.monthly_rate(1.0), 0.01);
        assert_eq!(RateType::Monthly.monthly_rate(0.0), 0.0);
        assert_eq!(RateType::Monthly.monthly_rate(-0.5), -0.005);
    }

    #[test]
    fn test_zero_yearly_rate() {
        assert_eq!(RateType::Yearly.monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_effective_annual_rate() {
        assert_relative_eq!(RateType::Yearly.effective_annual_rate(8.0), 0.08, epsilon = 1e-12);

        // 1% a month is a bit more than 12.68% a year
        let annual = RateType::Monthly.effective_annual_rate(1.0);
        assert!((annual - 0.126825).abs() < 1e-6);
    }

    #[test]
    fn test_serde_names_and_aliases() {
        assert_eq!(serde_json::to_string(&RateType::Yearly).unwrap(), "\"yearly\"");
        let parsed: RateType = serde_json::from_str("\"mensal\"").unwrap();
        assert_eq!(parsed, RateType::Monthly);
        let parsed: RateType = serde_json::from_str("\"anual\"").unwrap();
        assert_eq!(parsed, RateType::Yearly);
    }
}
