use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::amortization::LoanSummary;
use crate::config::ComparisonConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::types::LoanInput;

/// summary for one candidate tenure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub tenure_years: u32,
    pub emi: Money,
    pub total_interest: Money,
    pub total_payment: Money,
}

/// side-by-side tenure comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenureComparison {
    pub principal: Money,
    pub annual_rate: Rate,
    pub rows: Vec<ComparisonRow>,
}

impl TenureComparison {
    /// compute one row per candidate tenure
    ///
    /// Each row re-runs normalization and the payment calculation from
    /// scratch; rows share no state, so candidate order never changes a
    /// row's values.
    pub fn compute(principal: Money, annual_rate: Rate, candidate_years: &[u32]) -> Result<Self> {
        let mut rows = Vec::with_capacity(candidate_years.len());

        for &years in candidate_years {
            let input = LoanInput::years(principal, annual_rate, years);
            let summary = LoanSummary::compute(&input)?;

            rows.push(ComparisonRow {
                tenure_years: years,
                emi: summary.emi,
                total_interest: summary.total_interest,
                total_payment: summary.total_payment,
            });
        }

        debug!(candidates = rows.len(), principal = %principal, "computed tenure comparison");

        Ok(Self {
            principal,
            annual_rate,
            rows,
        })
    }

    /// compute using a configured candidate set
    pub fn compute_with(principal: Money, annual_rate: Rate, config: &ComparisonConfig) -> Result<Self> {
        Self::compute(principal, annual_rate, &config.candidate_years)
    }

    /// find the row for a given tenure
    pub fn row_for(&self, tenure_years: u32) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.tenure_years == tenure_years)
    }
}
