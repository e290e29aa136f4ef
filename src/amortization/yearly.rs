use serde::{Deserialize, Serialize};

use crate::amortization::schedule::{AmortizationSchedule, ScheduledPayment};
use crate::decimal::Money;

/// one year of an amortization schedule rolled up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyBucket {
    pub year: u32,
    pub total_payment: Money,
    pub total_principal: Money,
    pub total_interest: Money,
    pub ending_balance: Money,
}

/// year-by-year roll-up of a monthly schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyBreakdown {
    pub years: Vec<YearlyBucket>,
}

impl YearlyBreakdown {
    /// roll a full schedule up into yearly buckets
    pub fn from_schedule(schedule: &AmortizationSchedule) -> Self {
        Self::from_payments(&schedule.payments)
    }

    /// partition an ordered payment run into contiguous chunks of up to 12
    ///
    /// The final chunk holds the leftover months; an exactly divisible tenure
    /// ends on a full 12-month year, never an empty one.
    pub fn from_payments(payments: &[ScheduledPayment]) -> Self {
        let years = payments
            .chunks(12)
            .enumerate()
            .map(|(index, run)| {
                let total_payment = run
                    .iter()
                    .map(|p| p.payment_amount)
                    .fold(Money::ZERO, |acc, x| acc + x);
                let total_principal = run
                    .iter()
                    .map(|p| p.principal_portion)
                    .fold(Money::ZERO, |acc, x| acc + x);
                let total_interest = run
                    .iter()
                    .map(|p| p.interest_portion)
                    .fold(Money::ZERO, |acc, x| acc + x);
                let ending_balance = run
                    .last()
                    .map(|p| p.ending_balance)
                    .unwrap_or(Money::ZERO);

                YearlyBucket {
                    year: (index + 1) as u32,
                    total_payment,
                    total_principal,
                    total_interest,
                    ending_balance,
                }
            })
            .collect();

        Self { years }
    }

    /// total paid across all years
    pub fn total_payment(&self) -> Money {
        self.years.iter().fold(Money::ZERO, |acc, y| acc + y.total_payment)
    }

    /// total principal repaid across all years
    pub fn total_principal(&self) -> Money {
        self.years.iter().fold(Money::ZERO, |acc, y| acc + y.total_principal)
    }

    /// total interest paid across all years
    pub fn total_interest(&self) -> Money {
        self.years.iter().fold(Money::ZERO, |acc, y| acc + y.total_interest)
    }
}
