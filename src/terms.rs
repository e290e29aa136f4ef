use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{EngineError, Result};
use crate::types::{LoanInput, TenureUnit};

/// loan terms resolved to a monthly periodic rate and a whole period count
///
/// Derived from a `LoanInput` per calculation; never stored or mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTerms {
    pub monthly_rate: Rate,
    pub total_periods: u32,
}

impl NormalizedTerms {
    /// validate a loan input and resolve it to monthly terms
    ///
    /// Fractional tenures round up: 2.5 years becomes 30 periods and a
    /// fractional month count becomes the next whole month.
    pub fn from_input(input: &LoanInput) -> Result<Self> {
        if !input.principal.is_positive() {
            return Err(EngineError::InvalidPrincipal {
                principal: input.principal,
            });
        }

        if input.annual_rate.is_negative() {
            return Err(EngineError::InvalidInterestRate {
                rate: input.annual_rate,
            });
        }

        if input.tenure_value <= Decimal::ZERO {
            return Err(EngineError::InvalidTenure {
                value: input.tenure_value,
                unit: input.tenure_unit,
            });
        }

        let months = match input.tenure_unit {
            TenureUnit::Years => (input.tenure_value * Decimal::from(12)).ceil(),
            TenureUnit::Months => input.tenure_value.ceil(),
        };

        let total_periods = months.to_u32().ok_or_else(|| EngineError::CalculationError {
            message: format!("tenure does not resolve to a representable period count: {months}"),
        })?;

        if total_periods < 1 {
            return Err(EngineError::InvalidTenure {
                value: input.tenure_value,
                unit: input.tenure_unit,
            });
        }

        Ok(Self {
            monthly_rate: input.annual_rate.monthly_rate(),
            total_periods,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use rust_decimal_macros::dec;

    #[test]
    fn test_years_resolve_to_months() {
        let input = LoanInput::years(Money::from_major(500_000), Rate::from_percentage(dec!(8.5)), 20);
        let terms = NormalizedTerms::from_input(&input).unwrap();

        assert_eq!(terms.total_periods, 240);
        // 8.5% / 100 / 12
        assert!((terms.monthly_rate.as_decimal() - dec!(0.0070833333)).abs() < dec!(0.0000000001));
    }

    #[test]
    fn test_months_pass_through() {
        let input = LoanInput::months(Money::from_major(10_000), Rate::ZERO, 12);
        let terms = NormalizedTerms::from_input(&input).unwrap();

        assert_eq!(terms.total_periods, 12);
        assert!(terms.monthly_rate.is_zero());
    }

    #[test]
    fn test_fractional_tenure_rounds_up() {
        let input = LoanInput::new(
            Money::from_major(10_000),
            Rate::from_percentage(dec!(6)),
            dec!(2.5),
            TenureUnit::Years,
        );
        assert_eq!(NormalizedTerms::from_input(&input).unwrap().total_periods, 30);

        let input = LoanInput::new(
            Money::from_major(10_000),
            Rate::from_percentage(dec!(6)),
            dec!(5.2),
            TenureUnit::Months,
        );
        assert_eq!(NormalizedTerms::from_input(&input).unwrap().total_periods, 6);
    }

    #[test]
    fn test_zero_principal_rejected() {
        let input = LoanInput::years(Money::ZERO, Rate::from_percentage(dec!(8)), 10);
        assert!(matches!(
            NormalizedTerms::from_input(&input),
            Err(EngineError::InvalidPrincipal { .. })
        ));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let input = LoanInput::years(Money::from_major(1_000), Rate::from_percentage(dec!(-1)), 10);
        assert!(matches!(
            NormalizedTerms::from_input(&input),
            Err(EngineError::InvalidInterestRate { .. })
        ));
    }

    #[test]
    fn test_non_positive_tenure_rejected() {
        let input = LoanInput::new(
            Money::from_major(1_000),
            Rate::from_percentage(dec!(8)),
            dec!(0),
            TenureUnit::Months,
        );
        assert!(matches!(
            NormalizedTerms::from_input(&input),
            Err(EngineError::InvalidTenure { .. })
        ));
    }

    #[test]
    fn test_zero_rate_is_valid() {
        let input = LoanInput::months(Money::from_major(1_000), Rate::ZERO, 1);
        let terms = NormalizedTerms::from_input(&input).unwrap();
        assert_eq!(terms.total_periods, 1);
    }
}
