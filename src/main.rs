//! Rent vs Buy CLI
//!
//! Runs one buy-vs-rent scenario and prints the mortgage, ownership cost and
//! rent summaries. `--json` prints the full table, `--csv` writes it to a file.

use anyhow::{Context, Result};
use clap::Parser;
use rent_vs_buy::{Assumptions, MortgageTerms, RentComparison, RentTerms};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rent_vs_buy", about = "Compare buying a home against renting and investing")]
struct Args {
    /// Purchase price of the home
    #[arg(long, default_value_t = 600_000.0)]
    home_price: f64,

    /// Down payment as a fraction of the price
    #[arg(long, default_value_t = 0.03)]
    down_fraction: f64,

    /// Loan term in years
    #[arg(long, default_value_t = 30)]
    years: u32,

    /// Annual interest rate, percent
    #[arg(long, default_value_t = 6.0)]
    rate: f64,

    /// Monthly rent of the alternative
    #[arg(long, default_value_t = 2500.0)]
    rent: f64,

    /// Annual rent increase (fractional)
    #[arg(long, default_value_t = 0.03)]
    rent_increase: f64,

    /// Expected market return (fractional); defaults to MARKET_RETURN or 0.08
    #[arg(long)]
    market_return: Option<f64>,

    /// Print the full table as JSON
    #[arg(long)]
    json: bool,

    /// Write the full table to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut assumptions = Assumptions::from_env();
    if let Some(market_return) = args.market_return {
        assumptions.market_return = market_return;
    }

    let terms = MortgageTerms::with_down_payment_fraction(args.home_price, args.down_fraction, args.years, args.rate);
    let rent = RentTerms::new(args.rent, args.rent_increase);

    let table = RentComparison::new(&assumptions)
        .compare(&terms, &rent)
        .context("failed to run comparison")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table.rows)?);
        return Ok(());
    }

    if let Some(path) = &args.csv {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        for row in &table.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        println!("Full table written to: {}", path.display());
    }

    let schedule = table.schedule.summary();
    let renting = table.summary();
    let (Some(first), Some(last)) = (table.rows.first(), table.rows.last()) else {
        println!("Empty schedule");
        return Ok(());
    };

    println!("\nMortgage parameters:");
    println!("  Home Price: ${:.0}", terms.home_price);
    println!("  Down Payment: ${:.0} ({:.0}%)", terms.down_payment, terms.down_payment_percent());
    println!("  Loan Amount: ${:.0}", terms.loan_amount());
    println!("  Interest Rate: {}%", terms.annual_interest_rate_percent);
    println!("  Maintenance Rate: {}%", terms.maintenance_rate_percent);
    println!("  Property Tax Rate: {}%", terms.property_tax_rate_percent);
    println!("  Insurance Rate: {}%", terms.insurance_rate_percent);
    println!("  Term: {} years", terms.term_years);

    println!("\nMortgage costs and value analysis:");
    println!("  Initial Monthly Payment: ${:.0}", first.monthly_payment);
    println!("  Initial Total Monthly Cost: ${:.0}", first.total_monthly_payment);
    println!("  Final Total Monthly Cost: ${:.0}", last.total_monthly_payment);
    println!("  Total Interest: ${:.0}", schedule.total_interest);
    println!("  Total PMI: ${:.0}", schedule.total_pmi);
    println!("  Total cost of owning: ${:.0}", schedule.total_amount_paid);
    println!("  Final Home Value: ${:.0}", schedule.final_home_value);
    println!(
        "  Total Appreciation: ${:.0} ({:.1}%)",
        schedule.total_appreciation, schedule.appreciation_percent
    );

    println!("\nRent costs and value analysis:");
    println!("  Initial Monthly Rent: ${:.0}", renting.initial_monthly_rent);
    println!("  Final Monthly Rent: ${:.0}", renting.final_monthly_rent);
    println!("  Total Rent Paid: ${:.0}", renting.total_rent_paid);
    println!(
        "  Invested difference after {} years: ${:.0}",
        table.len(),
        renting.final_savings_with_investment
    );
    println!("  Net difference: ${:.0}", renting.net_difference);

    Ok(())
}
