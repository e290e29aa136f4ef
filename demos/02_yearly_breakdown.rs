/// roll a multi-year schedule up into yearly buckets
use loan_engine_rs::{AmortizationSchedule, LoanInput, Money, Rate, YearlyBreakdown};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = LoanInput::years(
        Money::from_major(500_000),
        Rate::from_percentage(dec!(8.5)),
        20,
    );

    let schedule = AmortizationSchedule::generate(&input)?;
    let breakdown = YearlyBreakdown::from_schedule(&schedule);

    println!("{:>4} {:>14} {:>14} {:>14} {:>14}", "year", "payment", "principal", "interest", "balance");

    for year in &breakdown.years {
        println!(
            "{:>4} {:>14} {:>14} {:>14} {:>14}",
            year.year,
            year.total_payment.to_currency(),
            year.total_principal.to_currency(),
            year.total_interest.to_currency(),
            year.ending_balance.to_currency(),
        );
    }

    println!("principal repaid: {}", breakdown.total_principal());
    println!("interest paid:    {}", breakdown.total_interest());

    Ok(())
}
