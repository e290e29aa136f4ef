/// generate a full amortization schedule and stamp payment dates
use loan_engine_rs::chrono::{TimeZone, Utc};
use loan_engine_rs::{AmortizationSchedule, LoanInput, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = LoanInput::months(
        Money::from_major(100_000),
        Rate::from_percentage(dec!(12)),
        12,
    );

    let schedule = AmortizationSchedule::generate(&input)?;
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let dates = schedule.payment_dates(start);

    println!("EMI: {}", schedule.emi);
    println!("{:>3} {:>12} {:>12} {:>12} {:>12}", "#", "payment", "principal", "interest", "balance");

    for (payment, date) in schedule.payments.iter().zip(&dates) {
        println!(
            "{:>3} {:>12} {:>12} {:>12} {:>12}   {}",
            payment.payment_number,
            payment.payment_amount.to_currency(),
            payment.principal_portion.to_currency(),
            payment.interest_portion.to_currency(),
            payment.ending_balance.to_currency(),
            date.format("%Y-%m-%d"),
        );
    }

    println!("total interest: {}", schedule.total_interest);

    Ok(())
}
