use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// how the final schedule period absorbs rounding drift
///
/// The fixed payment is a rounded annuity value while the running balance
/// accumulates unrounded subtraction, so the naive loop does not land on
/// exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalPaymentAdjustment {
    /// last period pays off the exact remaining balance; its payment amount
    /// is recomputed so the schedule terminates at a zero balance
    ClampToZero,
    /// keep the fixed payment in the last period and let the residual stand
    CarryResidual,
}

/// schedule generation policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub final_adjustment: FinalPaymentAdjustment,
    /// tolerance on the terminal balance under `CarryResidual`
    pub balance_epsilon: Money,
}

impl ScheduleConfig {
    /// exact zero-balance termination
    pub fn clamped() -> Self {
        Self {
            final_adjustment: FinalPaymentAdjustment::ClampToZero,
            balance_epsilon: Money::from_minor(1),
        }
    }

    /// naive iterative subtraction, faithful to plain EMI calculators
    pub fn unadjusted() -> Self {
        Self {
            final_adjustment: FinalPaymentAdjustment::CarryResidual,
            balance_epsilon: Money::from_minor(1),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::clamped()
    }
}

/// candidate tenure sets for side-by-side comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    pub candidate_years: Vec<u32>,
}

impl ComparisonConfig {
    pub fn new(candidate_years: Vec<u32>) -> Self {
        Self { candidate_years }
    }

    /// home loan calculator preset
    pub fn home_loan() -> Self {
        Self::new(vec![15, 20, 25])
    }

    /// mortgage calculator preset
    pub fn mortgage() -> Self {
        Self::new(vec![15, 20, 30])
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self::home_loan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_config_clamps() {
        let config = ScheduleConfig::default();
        assert_eq!(config.final_adjustment, FinalPaymentAdjustment::ClampToZero);
        assert_eq!(config.balance_epsilon, Money::from_minor(1));
    }

    #[test]
    fn test_comparison_presets() {
        assert_eq!(ComparisonConfig::home_loan().candidate_years, vec![15, 20, 25]);
        assert_eq!(ComparisonConfig::mortgage().candidate_years, vec![15, 20, 30]);
        assert_eq!(ComparisonConfig::default(), ComparisonConfig::home_loan());
    }
}
