//! Sweep home prices with a fixed down payment fraction and compare owning
//! against renting and investing at a given year.
//!
//! Also prints the 3% / 10% / 20% down payment comparison.
//! Reads MARKET_RETURN, PMI_RATE and PMI_LTV_THRESHOLD from the environment,
//! or a `key,value` file named by ASSUMPTIONS_CSV.
//! Set SCENARIOS_CSV to additionally run every scenario in that file.

use anyhow::{Context, Result};
use clap::Parser;
use rent_vs_buy::scenario::{linspace, ScenarioRunner};
use rent_vs_buy::terms::load_scenarios;
use rent_vs_buy::{Assumptions, RentTerms};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "price_sweep")]
struct Args {
    /// Lowest home price
    #[arg(long, default_value_t = 350_000.0)]
    min_price: f64,

    /// Highest home price
    #[arg(long, default_value_t = 750_000.0)]
    max_price: f64,

    /// Number of prices in the sweep
    #[arg(long, default_value_t = 9)]
    points: usize,

    /// Down payment fraction
    #[arg(long, default_value_t = 0.03)]
    down_fraction: f64,

    /// Annual interest rate, percent
    #[arg(long, default_value_t = 6.0)]
    rate: f64,

    /// Monthly rent of the alternative
    #[arg(long, default_value_t = 2500.0)]
    rent: f64,

    /// 0-based year index to sample
    #[arg(long, default_value_t = 10)]
    year_index: usize,

    /// Output CSV path
    #[arg(long, default_value = "price_sweep_output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let assumptions = match env::var("ASSUMPTIONS_CSV") {
        Ok(path) => Assumptions::from_csv_path(Path::new(&path))
            .with_context(|| format!("unable to load assumptions from {}", path))?,
        Err(_) => Assumptions::from_env(),
    };
    let runner = ScenarioRunner::new(assumptions);
    let rent = RentTerms::new(args.rent, 0.03);
    let prices = linspace(args.min_price, args.max_price, args.points);

    let points = runner.price_sweep(&prices, args.down_fraction, 30, args.rate, &rent, args.year_index)?;

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("unable to create {}", args.output.display()))?;
    for point in &points {
        writer.serialize(point)?;
    }
    writer.flush()?;

    println!("{:>12} {:>14} {:>14} {:>14}", "HomePrice", "HomeValue", "Savings", "Difference");
    println!("{}", "-".repeat(57));
    for point in &points {
        println!(
            "{:>12.0} {:>14.2} {:>14.2} {:>14.2}",
            point.home_price, point.home_value, point.savings_with_investment, point.investment_saving
        );
    }
    println!("\nOutput written to {}", args.output.display());

    let home_price = 600_000.0;
    println!("\nDown payment comparison at ${:.0}:", home_price);
    for high in [0.10, 0.20] {
        let Some(cmp) = runner.compare_down_payments(home_price, 0.03, high, 30, args.rate, args.year_index)? else {
            continue;
        };
        println!(
            "  3% vs {:.0}% down: extra cost paid after {} years ${:.0}, difference invested ${:.0}",
            high * 100.0,
            cmp.year_index,
            cmp.extra_cost_paid,
            cmp.invested_difference
        );
    }

    if let Ok(path) = env::var("SCENARIOS_CSV") {
        let scenarios = load_scenarios(&path)?;
        println!("\nScenarios from {}:", path);
        for (scenario, result) in scenarios.iter().zip(runner.run_batch(&scenarios)) {
            let table = result?;
            let summary = table.summary();
            println!(
                "  ${:.0} @ {}%: final savings ${:.0}, final home value ${:.0}",
                scenario.mortgage.home_price,
                scenario.mortgage.annual_interest_rate_percent,
                summary.final_savings_with_investment,
                summary.final_home_value
            );
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
