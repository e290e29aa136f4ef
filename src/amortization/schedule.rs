use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::amortization::payment::emi_amount;
use crate::calendar;
use crate::config::{FinalPaymentAdjustment, ScheduleConfig};
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::terms::NormalizedTerms;
use crate::types::LoanInput;

/// scheduled payment in amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub payment_number: u32,
    pub beginning_balance: Money,
    pub payment_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub ending_balance: Money,
    pub cumulative_interest: Money,
    pub cumulative_principal: Money,
}

/// amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: Money,
    pub annual_rate: Rate,
    pub total_periods: u32,
    /// fixed payment; the final row may differ under `ClampToZero`
    pub emi: Money,
    pub payments: Vec<ScheduledPayment>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl AmortizationSchedule {
    /// generate payment schedule with the default policy (exact zero-balance
    /// termination)
    pub fn generate(input: &LoanInput) -> Result<Self> {
        Self::generate_with(input, &ScheduleConfig::default())
    }

    /// generate payment schedule with an explicit policy
    pub fn generate_with(input: &LoanInput, config: &ScheduleConfig) -> Result<Self> {
        let terms = NormalizedTerms::from_input(input)?;
        let monthly_rate = terms.monthly_rate.as_decimal();
        let emi = emi_amount(input.principal, terms.monthly_rate, terms.total_periods);

        let mut payments = Vec::with_capacity(terms.total_periods as usize);
        let mut balance = input.principal;
        let mut cumulative_interest = Money::ZERO;
        let mut cumulative_principal = Money::ZERO;

        for payment_number in 1..=terms.total_periods {
            let beginning_balance = balance;
            let interest_portion = Money::from_decimal(balance.as_decimal() * monthly_rate);
            let is_last = payment_number == terms.total_periods;

            // the fixed payment is a rounded annuity value while the balance
            // accumulates unrounded subtraction; the last row absorbs the
            // residual unless the caller asked for the naive loop
            let (payment_amount, principal_portion) =
                if is_last && config.final_adjustment == FinalPaymentAdjustment::ClampToZero {
                    (balance + interest_portion, balance)
                } else {
                    (emi, emi - interest_portion)
                };

            balance = beginning_balance - principal_portion;
            cumulative_interest += interest_portion;
            cumulative_principal += principal_portion;

            payments.push(ScheduledPayment {
                payment_number,
                beginning_balance,
                payment_amount,
                principal_portion,
                interest_portion,
                ending_balance: balance,
                cumulative_interest,
                cumulative_principal,
            });
        }

        let total_interest = payments
            .iter()
            .map(|p| p.interest_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_payment = payments
            .iter()
            .map(|p| p.payment_amount)
            .fold(Money::ZERO, |acc, x| acc + x);

        debug!(
            periods = terms.total_periods,
            emi = %emi,
            total_interest = %total_interest,
            "generated amortization schedule"
        );

        Ok(Self {
            principal: input.principal,
            annual_rate: input.annual_rate,
            total_periods: terms.total_periods,
            emi,
            payments,
            total_interest,
            total_payment,
        })
    }

    /// get payment for specific period
    pub fn get_payment(&self, payment_number: u32) -> Option<&ScheduledPayment> {
        if payment_number == 0 {
            return None;
        }
        self.payments.get((payment_number - 1) as usize)
    }

    /// get remaining balance after payment
    pub fn balance_after_payment(&self, payment_number: u32) -> Money {
        self.get_payment(payment_number)
            .map(|p| p.ending_balance)
            .unwrap_or(self.principal)
    }

    /// due dates for every payment, stepping monthly from a start date
    pub fn payment_dates(&self, start_date: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        calendar::payment_dates(start_date, self.total_periods)
    }
}
