/// quick start - minimal example to get started
use loan_engine_rs::{LoanInput, LoanSummary, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a 500,000 home loan at 8.5% over 20 years
    let input = LoanInput::years(
        Money::from_major(500_000),
        Rate::from_percentage(dec!(8.5)),
        20,
    );

    let summary = LoanSummary::compute(&input)?;

    println!("EMI:            {}", summary.emi);
    println!("Total payment:  {}", summary.total_payment);
    println!("Total interest: {}", summary.total_interest);

    Ok(())
}
