use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::terms::NormalizedTerms;
use crate::types::LoanInput;

/// fixed-payment summary for an amortizing loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub principal: Money,
    /// equated monthly installment
    pub emi: Money,
    pub total_payment: Money,
    pub total_interest: Money,
}

impl LoanSummary {
    /// compute the EMI and totals for a loan input
    pub fn compute(input: &LoanInput) -> Result<Self> {
        let terms = NormalizedTerms::from_input(input)?;
        Ok(Self::from_terms(input.principal, &terms))
    }

    /// compute from already-normalized terms
    pub fn from_terms(principal: Money, terms: &NormalizedTerms) -> Self {
        let emi = emi_amount(principal, terms.monthly_rate, terms.total_periods);

        if terms.monthly_rate.is_zero() {
            // linear amortization, no interest
            return Self {
                principal,
                emi,
                total_payment: principal,
                total_interest: Money::ZERO,
            };
        }

        let total_payment = emi * Decimal::from(terms.total_periods);

        Self {
            principal,
            emi,
            total_payment,
            total_interest: total_payment - principal,
        }
    }
}

/// calculate EMI amount
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1), with a linear split when the
/// rate is zero.
pub(crate) fn emi_amount(principal: Money, monthly_rate: Rate, periods: u32) -> Money {
    if periods == 0 {
        return principal;
    }

    if monthly_rate.is_zero() {
        return principal / Decimal::from(periods);
    }

    let r = monthly_rate.as_decimal();
    let compound = compound_factor(r, periods);

    let numerator = principal.as_decimal() * r * compound;
    let denominator = compound - Decimal::ONE;

    Money::from_decimal(numerator / denominator)
}

/// (1 + r)^n by iterated multiplication
pub(crate) fn compound_factor(rate: Decimal, periods: u32) -> Decimal {
    let mut compound = Decimal::ONE;
    let base = Decimal::ONE + rate;
    for _ in 0..periods {
        compound *= base;
    }
    compound
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_home_loan_emi() {
        // 500,000 at 8.5% over 20 years
        let input = LoanInput::years(Money::from_major(500_000), Rate::from_percentage(dec!(8.5)), 20);
        let summary = LoanSummary::compute(&input).unwrap();

        let expected = dec!(4339.12);
        let diff = (summary.emi.as_decimal() - expected).abs();
        assert!(diff / expected < dec!(0.005), "emi was {}", summary.emi);
    }

    #[test]
    fn test_annuity_consistency() {
        let input = LoanInput::years(Money::from_major(250_000), Rate::from_percentage(dec!(7.25)), 15);
        let summary = LoanSummary::compute(&input).unwrap();

        let expected_total = summary.emi * Decimal::from(180);
        assert_eq!(summary.total_payment, expected_total);
        assert_eq!(summary.total_interest, summary.total_payment - summary.principal);
        assert!(summary.total_interest.is_positive());
    }

    #[test]
    fn test_zero_rate_linear_split() {
        // 10,000 at 0% over 12 months
        let input = LoanInput::months(Money::from_major(10_000), Rate::ZERO, 12);
        let summary = LoanSummary::compute(&input).unwrap();

        assert_eq!(summary.emi, Money::from_str_exact("833.33333333").unwrap());
        assert_eq!(summary.total_payment, Money::from_major(10_000));
        assert_eq!(summary.total_interest, Money::ZERO);
    }

    #[test]
    fn test_single_period_degenerates() {
        // one period collapses to principal * (1 + r)
        let input = LoanInput::months(Money::from_major(1_000), Rate::from_percentage(dec!(12)), 1);
        let summary = LoanSummary::compute(&input).unwrap();

        assert_eq!(summary.emi, Money::from_major(1_010));
        assert_eq!(summary.total_payment, Money::from_major(1_010));
        assert_eq!(summary.total_interest, Money::from_major(10));
    }

    #[test]
    fn test_compound_factor() {
        assert_eq!(compound_factor(dec!(0.01), 0), Decimal::ONE);
        assert_eq!(compound_factor(dec!(0.01), 1), dec!(1.01));
        assert_eq!(compound_factor(dec!(0.01), 2), dec!(1.0201));
    }

    #[test]
    fn test_invalid_input_propagates() {
        let input = LoanInput::years(Money::ZERO, Rate::from_percentage(dec!(8)), 10);
        assert!(LoanSummary::compute(&input).is_err());
    }
}
