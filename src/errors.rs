use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::types::{TenureUnit, TimeUnit};

/// Every variant is a caller-recoverable input precondition violation;
/// validation runs before any schedule row is produced.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid principal: {principal}, must be positive")]
    InvalidPrincipal {
        principal: Money,
    },

    #[error("invalid interest rate: {rate}, must not be negative")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid tenure: {value} {unit}, must resolve to at least one period")]
    InvalidTenure {
        value: Decimal,
        unit: TenureUnit,
    },

    #[error("invalid time period: {value} {unit}, must be positive")]
    InvalidTimePeriod {
        value: Decimal,
        unit: TimeUnit,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
