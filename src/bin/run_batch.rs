//! Project every scenario of a CSV file in parallel
//!
//! Input header: name,initial,monthly,rate,rate_type,period,period_type
//! Output: one summary row per valid scenario

use anyhow::{Context, Result};
use clap::Parser;
use first_million::display::format_duration;
use first_million::inputs::{load_scenarios, DEFAULT_MAX_MONTHS};
use first_million::projection::export::write_summaries_csv;
use first_million::projection::project_batch;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Project a file of savings scenarios")]
struct Args {
    /// Scenario CSV file
    input: PathBuf,

    /// Summary CSV to write
    #[arg(long, default_value = "batch_projection_output.csv")]
    output: PathBuf,

    /// Longest horizon accepted, in months
    #[arg(long, default_value_t = DEFAULT_MAX_MONTHS)]
    max_months: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.input.display());

    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let (valid, rejected): (Vec<_>, Vec<_>) = scenarios
        .into_iter()
        .partition(|s| match s.inputs.validate(args.max_months) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Skipping scenario '{}': {}", s.name, e);
                false
            }
        });
    if !rejected.is_empty() {
        println!("Skipped {} invalid scenarios", rejected.len());
    }

    println!("Running projections...");
    let proj_start = Instant::now();
    let summaries = project_batch(&valid);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_summaries_csv(file, &summaries)?;
    println!("Output written to {}", args.output.display());

    let reached: Vec<_> = summaries
        .iter()
        .filter_map(|s| s.months_to_million.map(|m| (s, m)))
        .collect();
    println!("\nBatch Summary:");
    println!("  Scenarios reaching the million: {}/{}", reached.len(), summaries.len());
    if let Some((fastest, months)) = reached.iter().min_by_key(|(_, m)| *m) {
        println!("  Fastest: {} in {}", fastest.name, format_duration(*months));
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
