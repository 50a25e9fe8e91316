pub mod aggregate;
pub mod error;
pub mod pipeline;
pub mod profit_loss;
pub mod status;
pub mod types;

pub use error::LoanPerfError;
pub use types::*;

/// Standard result type for all loan-perf operations
pub type LoanPerfResult<T> = Result<T, LoanPerfError>;
