//! Project a single savings plan and print the summary and annual table
//!
//! Example: project --initial 10.000,00 --monthly 1.500,00 --rate 9 --period 25

use anyhow::{Context, Result};
use clap::Parser;
use first_million::display::{
    format_currency, format_elapsed, format_percent, million_headline,
};
use first_million::inputs::{
    parse_currency_input, parse_number_input, PeriodType, ProjectionInputs, RateType,
    DEFAULT_MAX_MONTHS,
};
use first_million::projection::export::{to_json, write_snapshots_csv};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "project", about = "Compound-interest projection toward the first million")]
struct Args {
    /// Initial deposit in pt-BR notation (e.g. 10.000,00)
    #[arg(long, default_value = "0,00", allow_hyphen_values = true)]
    initial: String,

    /// Monthly contribution in pt-BR notation
    #[arg(long, default_value = "500,00", allow_hyphen_values = true)]
    monthly: String,

    /// Nominal interest rate in percent (e.g. 10 or 0,8)
    #[arg(long, default_value = "10", allow_hyphen_values = true)]
    rate: String,

    #[arg(long, value_enum, default_value_t = RateType::Yearly)]
    rate_type: RateType,

    /// Horizon length in --period-type units
    #[arg(long, default_value = "30", allow_hyphen_values = true)]
    period: String,

    #[arg(long, value_enum, default_value_t = PeriodType::Years)]
    period_type: PeriodType,

    /// Longest horizon accepted, in months
    #[arg(long, default_value_t = DEFAULT_MAX_MONTHS)]
    max_months: u32,

    /// Write every monthly snapshot to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the full result as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

/// Parse the text flags into projection inputs
fn build_inputs(args: &Args) -> Result<ProjectionInputs> {
    Ok(ProjectionInputs {
        initial: parse_currency_input(&args.initial).context("Invalid --initial")?,
        monthly: parse_currency_input(&args.monthly).context("Invalid --monthly")?,
        rate: parse_number_input(&args.rate).context("Invalid --rate")?,
        rate_type: args.rate_type,
        period: parse_number_input(&args.period).context("Invalid --period")?,
        period_type: args.period_type,
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let inputs = build_inputs(&args)?;
    inputs
        .validate(args.max_months)
        .context("Invalid projection inputs")?;

    let start = Instant::now();
    let result = inputs.project();
    log::info!(
        "Projected {} months in {:?}",
        result.final_snapshot().month,
        start.elapsed()
    );

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_snapshots_csv(file, &result.snapshots)?;
        log::info!("Snapshots written to {}", path.display());
    }

    if args.json {
        println!("{}", to_json(&result)?);
        return Ok(());
    }

    let stats = &result.stats;
    println!(
        "{} + {}/mês a {}% {} por {} {}",
        format_currency(inputs.initial),
        format_currency(inputs.monthly),
        inputs.rate,
        inputs.rate_type.label(),
        inputs.period,
        inputs.period_type.label()
    );
    println!("{}", million_headline(stats));
    if let Some(snap) = result.million_snapshot() {
        println!("  Saldo no mês {}: {}", snap.month, format_currency(snap.total));
    }
    println!();
    println!("  Valor Total Final: {}", format_currency(stats.total_amount));
    println!("  Total Investido:   {}", format_currency(stats.total_invested));
    println!(
        "  Total em Juros:    {} (+{} de rentabilidade)",
        format_currency(stats.total_interest),
        format_percent(stats.return_on_investment_pct(), 0)
    );
    println!(
        "  Taxa mensal:       {} ({} ao ano)",
        format_percent(inputs.monthly_rate() * 100.0, 4),
        format_percent(inputs.rate_type.effective_annual_rate(inputs.rate) * 100.0, 2)
    );
    println!();

    let rows = result.yearly_rows();
    if rows.is_empty() {
        return Ok(());
    }

    println!(
        "{:<16} {:>20} {:>20} {:>20}",
        "Tempo", "Investido Total", "Juros Acumulados", "Total Acumulado"
    );
    for row in rows {
        println!(
            "{:<16} {:>20} {:>20} {:>20}",
            format_elapsed(row.month),
            format_currency(row.invested),
            format!("+{}", format_currency(row.interest)),
            format_currency(row.total)
        );
    }

    Ok(())
}
