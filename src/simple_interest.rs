use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{EngineError, Result};
use crate::types::TimeUnit;

/// non-compounding interest over a fixed time span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestResult {
    pub principal: Money,
    pub rate: Rate,
    /// time span normalized to years (months / 12, days / 365)
    pub time_years: Decimal,
    pub interest: Money,
    pub total_amount: Money,
    pub monthly_interest: Money,
    pub daily_interest: Money,
}

/// one month of linear interest accumulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearAccrual {
    pub month: u32,
    pub interest_accrued: Money,
    pub cumulative_interest: Money,
    pub balance: Money,
}

impl SimpleInterestResult {
    /// calculate simple interest (no compounding)
    pub fn compute(principal: Money, rate: Rate, time: Decimal, unit: TimeUnit) -> Result<Self> {
        if !principal.is_positive() {
            return Err(EngineError::InvalidPrincipal { principal });
        }

        if rate.is_negative() {
            return Err(EngineError::InvalidInterestRate { rate });
        }

        if time <= Decimal::ZERO {
            return Err(EngineError::InvalidTimePeriod { value: time, unit });
        }

        let time_years = match unit {
            TimeUnit::Years => time,
            TimeUnit::Months => time / Decimal::from(12),
            TimeUnit::Days => time / Decimal::from(365),
        };

        let interest = Money::from_decimal(principal.as_decimal() * rate.as_decimal() * time_years);

        Ok(Self {
            principal,
            rate,
            time_years,
            interest,
            total_amount: principal + interest,
            monthly_interest: Money::from_decimal(
                principal.as_decimal() * rate.monthly_rate().as_decimal(),
            ),
            daily_interest: Money::from_decimal(
                principal.as_decimal() * rate.daily_rate().as_decimal(),
            ),
        })
    }

    /// month-by-month linear accumulation
    ///
    /// Interest grows by the same amount every month; a final partial month
    /// accrues the remainder so the running total lands exactly on
    /// `interest`.
    pub fn monthly_breakdown(&self) -> Vec<LinearAccrual> {
        let total_months = (self.time_years * Decimal::from(12))
            .ceil()
            .to_u32()
            .unwrap_or(0);

        let mut rows = Vec::with_capacity(total_months as usize);
        let mut cumulative = Money::ZERO;

        for month in 1..=total_months {
            let interest_accrued = if month == total_months {
                self.interest - cumulative
            } else {
                self.monthly_interest
            };

            cumulative += interest_accrued;

            rows.push(LinearAccrual {
                month,
                interest_accrued,
                cumulative_interest: cumulative,
                balance: self.principal + cumulative,
            });
        }

        rows
    }
}
