//! CSV and JSON output of projection results

use super::{MonthlySnapshot, ScenarioSummary};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Write snapshots as CSV with a header row
pub fn write_snapshots_csv<'a, W, I>(writer: W, snapshots: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a MonthlySnapshot>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for snapshot in snapshots {
        wtr.serialize(snapshot)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write batch summaries as CSV. Scenarios that never reach the million leave
/// `months_to_million` empty.
pub fn write_summaries_csv<W: Write>(writer: W, summaries: &[ScenarioSummary]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for summary in summaries {
        wtr.serialize(summary)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
