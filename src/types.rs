use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::{Money, Rate};

/// unit for a loan tenure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TenureUnit {
    Years,
    Months,
}

impl fmt::Display for TenureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenureUnit::Years => write!(f, "years"),
            TenureUnit::Months => write!(f, "months"),
        }
    }
}

/// unit for a simple-interest time span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Years,
    Months,
    Days,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUnit::Years => write!(f, "years"),
            TimeUnit::Months => write!(f, "months"),
            TimeUnit::Days => write!(f, "days"),
        }
    }
}

/// loan parameters as supplied by the caller
///
/// Tenure may be fractional (e.g. 2.5 years); it is resolved to a whole
/// number of monthly periods during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    pub annual_rate: Rate,
    pub tenure_value: Decimal,
    pub tenure_unit: TenureUnit,
}

impl LoanInput {
    pub fn new(principal: Money, annual_rate: Rate, tenure_value: Decimal, tenure_unit: TenureUnit) -> Self {
        Self {
            principal,
            annual_rate,
            tenure_value,
            tenure_unit,
        }
    }

    /// loan with tenure in whole years
    pub fn years(principal: Money, annual_rate: Rate, years: u32) -> Self {
        Self::new(principal, annual_rate, Decimal::from(years), TenureUnit::Years)
    }

    /// loan with tenure in whole months
    pub fn months(principal: Money, annual_rate: Rate, months: u32) -> Self {
        Self::new(principal, annual_rate, Decimal::from(months), TenureUnit::Months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tenure_unit_display() {
        assert_eq!(TenureUnit::Years.to_string(), "years");
        assert_eq!(TimeUnit::Days.to_string(), "days");
    }

    #[test]
    fn test_loan_input_constructors() {
        let by_years = LoanInput::years(Money::from_major(500_000), Rate::from_percentage(dec!(8.5)), 20);
        assert_eq!(by_years.tenure_value, dec!(20));
        assert_eq!(by_years.tenure_unit, TenureUnit::Years);

        let by_months = LoanInput::months(Money::from_major(10_000), Rate::ZERO, 12);
        assert_eq!(by_months.tenure_value, dec!(12));
        assert_eq!(by_months.tenure_unit, TenureUnit::Months);
    }
}
