/// simple (non-compounding) interest with a monthly accumulation view
use loan_engine_rs::{Money, Rate, SimpleInterestResult, TimeUnit};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let result = SimpleInterestResult::compute(
        Money::from_major(10_000),
        Rate::from_percentage(dec!(5.5)),
        dec!(5),
        TimeUnit::Years,
    )?;

    println!("interest:       {}", result.interest);
    println!("total amount:   {}", result.total_amount);
    println!("per month:      {}", result.monthly_interest);
    println!("per day:        {}", result.daily_interest);

    println!("{:>5} {:>10} {:>12} {:>12}", "month", "accrued", "cumulative", "balance");
    for row in result.monthly_breakdown() {
        println!(
            "{:>5} {:>10} {:>12} {:>12}",
            row.month,
            row.interest_accrued.to_currency(),
            row.cumulative_interest.to_currency(),
            row.balance.to_currency(),
        );
    }

    Ok(())
}
