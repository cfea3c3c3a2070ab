//! Parallel projection of many scenarios

use crate::inputs::{PeriodType, RateType, Scenario};
use rayon::prelude::*;
use serde::Serialize;

/// One summary row per scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub initial: f64,
    pub monthly: f64,
    pub rate: f64,
    pub rate_type: RateType,
    pub period: f64,
    pub period_type: PeriodType,
    pub months: u32,
    pub total_invested: f64,
    pub total_interest: f64,
    pub total_amount: f64,
    pub months_to_million: Option<u32>,
    pub roi_pct: f64,
}

impl ScenarioSummary {
    fn from_scenario(scenario: &Scenario) -> Self {
        let inputs = &scenario.inputs;
        let result = inputs.project();
        let stats = result.stats;

        Self {
            name: scenario.name.clone(),
            initial: inputs.initial,
            monthly: inputs.monthly,
            rate: inputs.rate,
            rate_type: inputs.rate_type,
            period: inputs.period,
            period_type: inputs.period_type,
            months: result.final_snapshot().month,
            total_invested: stats.total_invested,
            total_interest: stats.total_interest,
            total_amount: stats.total_amount,
            months_to_million: stats.months_to_million,
            roi_pct: stats.return_on_investment_pct(),
        }
    }
}

/// Project every scenario in parallel. Output order follows input order.
pub fn project_batch(scenarios: &[Scenario]) -> Vec<ScenarioSummary> {
    log::info!("Projecting {} scenarios", scenarios.len());
    scenarios
        .par_iter()
        .map(ScenarioSummary::from_scenario)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::ProjectionInputs;

    fn scenario(name: &str, initial: f64, monthly: f64) -> Scenario {
        Scenario {
            name: name.to_string(),
            inputs: ProjectionInputs {
                initial,
                monthly,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_batch_preserves_order_and_matches_single_runs() {
        let scenarios: Vec<Scenario> = (0..50)
            .map(|i| scenario(&format!("s{i}"), i as f64 * 10_000.0, 500.0 + i as f64 * 50.0))
            .collect();

        let summaries = project_batch(&scenarios);
        assert_eq!(summaries.len(), 50);

        for (scenario, summary) in scenarios.iter().zip(&summaries) {
            assert_eq!(summary.name, scenario.name);
            let single = scenario.inputs.project();
            assert_eq!(summary.total_amount, single.stats.total_amount);
            assert_eq!(summary.months_to_million, single.stats.months_to_million);
            assert_eq!(summary.months, 360);
        }
    }

    #[test]
    fn test_richer_scenario_reaches_million_sooner() {
        let summaries = project_batch(&[
            scenario("modest", 0.0, 500.0),
            scenario("head_start", 200_000.0, 500.0),
        ]);
        let modest = summaries[0].months_to_million.expect("modest reaches the million");
        let head_start = summaries[1].months_to_million.expect("head start reaches the million");
        assert!(head_start < modest);
    }

    #[test]
    fn test_empty_batch() {
        assert!(project_batch(&[]).is_empty());
    }
}
