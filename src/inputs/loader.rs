//! Named scenario loading from CSV
//!
//! Expected header: `name,initial,monthly,rate,rate_type,period,period_type`.
//! Missing columns fall back to the default inputs.

use super::{default_monthly, default_period, default_rate, PeriodType, ProjectionInputs, RateType};
use crate::error::Result;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A labelled set of inputs
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub inputs: ProjectionInputs,
}

#[derive(Debug, Deserialize)]
struct ScenarioRecord {
    name: String,
    #[serde(default)]
    initial: f64,
    #[serde(default = "default_monthly")]
    monthly: f64,
    #[serde(default = "default_rate")]
    rate: f64,
    #[serde(default)]
    rate_type: RateType,
    #[serde(default = "default_period")]
    period: f64,
    #[serde(default)]
    period_type: PeriodType,
}

impl From<ScenarioRecord> for Scenario {
    fn from(record: ScenarioRecord) -> Self {
        Self {
            name: record.name,
            inputs: ProjectionInputs {
                initial: record.initial,
                monthly: record.monthly,
                rate: record.rate,
                rate_type: record.rate_type,
                period: record.period,
                period_type: record.period_type,
            },
        }
    }
}

/// Load scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let path = path.as_ref();
    log::info!("Loading scenarios from {}", path.display());
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any CSV source
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut scenarios = Vec::new();
    for record in rdr.deserialize::<ScenarioRecord>() {
        scenarios.push(Scenario::from(record?));
    }

    log::info!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_full_rows() {
        let data = "\
name,initial,monthly,rate,rate_type,period,period_type
base,0,500,10,yearly,30,years
aggressive,10000,2000,1,monthly,120,months
";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).expect("Failed to load");
        assert_eq!(scenarios.len(), 2);

        assert_eq!(scenarios[0].name, "base");
        assert_eq!(scenarios[0].inputs, ProjectionInputs::default());

        let aggressive = &scenarios[1].inputs;
        assert_eq!(aggressive.initial, 10_000.0);
        assert_eq!(aggressive.monthly, 2_000.0);
        assert_eq!(aggressive.rate_type, RateType::Monthly);
        assert_eq!(aggressive.period_type, PeriodType::Months);
        assert_eq!(aggressive.month_count(), 120);
    }

    #[test]
    fn test_missing_columns_use_defaults() {
        let data = "name,initial\nsaved, 50000\n";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).expect("Failed to load");
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].inputs.initial, 50_000.0);
        assert_eq!(scenarios[0].inputs.monthly, 500.0);
        assert_eq!(scenarios[0].inputs.period, 30.0);
    }

    #[test]
    fn test_portuguese_unit_names() {
        let data = "name,rate_type,period_type\nbr,mensal,meses\n";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).expect("Failed to load");
        assert_eq!(scenarios[0].inputs.rate_type, RateType::Monthly);
        assert_eq!(scenarios[0].inputs.period_type, PeriodType::Months);
    }

    #[test]
    fn test_bad_row_is_an_error() {
        let data = "name,initial\nbroken,lots\n";
        assert!(load_scenarios_from_reader(data.as_bytes()).is_err());
    }
}
