//! Print income tax breakdowns and a multi-year after-tax projection

use anyhow::Result;
use clap::Parser;
use rent_vs_buy::tax::{calculate_tax, project_lifetime_income, TaxBreakdown};

#[derive(Debug, Parser)]
#[command(name = "tax_summary")]
struct Args {
    /// Gross annual income
    #[arg(long, default_value_t = 145_000.0)]
    income: f64,

    /// Deductions
    #[arg(long, default_value_t = 14_500.0)]
    deductions: f64,

    /// Pre-tax retirement contribution
    #[arg(long, default_value_t = 20_000.0)]
    contribution: f64,

    /// Years for the lifetime projection
    #[arg(long, default_value_t = 30)]
    years: u32,

    /// Annual raise for the lifetime projection (fractional)
    #[arg(long, default_value_t = 0.05)]
    raise: f64,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn print_breakdown(t: &TaxBreakdown) {
    println!("  gross_income: {:.2}", t.gross_income);
    println!("  deductions: {:.2}", t.deductions);
    println!("  pretax_contribution: {:.2}", t.pretax_contribution);
    println!("  taxable_income: {:.2}", t.taxable_income);
    println!("  total_tax: {:.2}", t.total_tax);
    println!("  after_tax_income: {:.2}", t.after_tax_income);
    println!("  effective_tax_rate: {}", t.effective_tax_rate);
    println!("  biweekly_take_home: {:.1}", t.biweekly_take_home);
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let breakdown = calculate_tax(args.income, args.deductions, args.contribution);
    let lifetime = project_lifetime_income(args.income, args.deductions, 0.0, args.years, args.raise);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        println!("{}", serde_json::to_string_pretty(&lifetime)?);
        return Ok(());
    }

    println!("Tax breakdown:");
    print_breakdown(&breakdown);

    println!("\n{}\n", "=".repeat(50));
    println!(
        "Lifetime ({} years, {:.0}% raises, no contribution):",
        args.years,
        args.raise * 100.0
    );
    println!("  Total after-tax income: ${:.2}", lifetime.total_after_tax_income);
    println!("  Total tax: ${:.2}", lifetime.total_tax);

    Ok(())
}
