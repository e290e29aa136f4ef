pub mod amortization;
pub mod calendar;
pub mod comparison;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod simple_interest;
pub mod terms;
pub mod types;

// re-export key types
pub use amortization::{AmortizationSchedule, LoanSummary, ScheduledPayment, YearlyBreakdown, YearlyBucket};
pub use comparison::{ComparisonRow, TenureComparison};
pub use config::{ComparisonConfig, FinalPaymentAdjustment, ScheduleConfig};
pub use decimal::{Money, Rate};
pub use errors::{EngineError, Result};
pub use simple_interest::{LinearAccrual, SimpleInterestResult};
pub use terms::NormalizedTerms;
pub use types::{LoanInput, TenureUnit, TimeUnit};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
