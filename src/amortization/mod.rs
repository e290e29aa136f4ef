pub mod payment;
pub mod schedule;
pub mod yearly;

pub use payment::LoanSummary;
pub use schedule::{AmortizationSchedule, ScheduledPayment};
pub use yearly::{YearlyBreakdown, YearlyBucket};
