/// compare EMIs and interest cost across candidate tenures
use loan_engine_rs::{ComparisonConfig, Money, Rate, TenureComparison};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let comparison = TenureComparison::compute_with(
        Money::from_major(500_000),
        Rate::from_percentage(dec!(8.5)),
        &ComparisonConfig::home_loan(),
    )?;

    println!("{:>6} {:>12} {:>16} {:>16}", "years", "emi", "total interest", "total payment");

    for row in &comparison.rows {
        println!(
            "{:>6} {:>12} {:>16} {:>16}",
            row.tenure_years,
            row.emi.to_currency(),
            row.total_interest.to_currency(),
            row.total_payment.to_currency(),
        );
    }

    Ok(())
}
