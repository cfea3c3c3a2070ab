//! pt-BR presentation helpers for amounts, durations and headlines

mod currency;
mod duration;

pub use currency::{format_amount, format_currency, format_percent, group_thousands};
pub use duration::{format_duration, format_elapsed};

use crate::projection::SummaryStats;

/// Headline shown above the results
pub fn million_headline(stats: &SummaryStats) -> String {
    match stats.months_to_million {
        Some(months) => format!("Você atingirá R$ 1 milhão em: {}", format_duration(months)),
        None => "Continue investindo para alcançar o primeiro milhão!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline() {
        let mut stats = SummaryStats {
            total_invested: 180_000.0,
            total_interest: 851_400.0,
            total_amount: 1_031_400.0,
            months_to_million: Some(354),
        };
        assert_eq!(million_headline(&stats), "Você atingirá R$ 1 milhão em: 29 anos e 6 meses");

        stats.months_to_million = None;
        assert_eq!(
            million_headline(&stats),
            "Continue investindo para alcançar o primeiro milhão!"
        );
    }
}
