/// serialize calculation results to JSON for a presentation layer
use loan_engine_rs::{AmortizationSchedule, LoanInput, Money, Rate, TenureComparison, YearlyBreakdown};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = LoanInput::years(
        Money::from_major(250_000),
        Rate::from_percentage(dec!(7.25)),
        15,
    );

    let schedule = AmortizationSchedule::generate(&input)?;
    let breakdown = YearlyBreakdown::from_schedule(&schedule);
    let comparison = TenureComparison::compute(input.principal, input.annual_rate, &[15, 20, 30])?;

    println!("{}", serde_json::to_string_pretty(&breakdown)?);
    println!("{}", serde_json::to_string_pretty(&comparison)?);

    // a schedule round-trips through JSON unchanged
    let json = serde_json::to_string(&schedule)?;
    let restored: AmortizationSchedule = serde_json::from_str(&json)?;
    assert_eq!(restored, schedule);

    Ok(())
}
