//! Core ledger logic: the transaction model, amount validation and the
//! in-memory store that owns every record.

pub mod error;
pub mod models;
pub mod store;
pub mod validator;

pub use error::{CoreError, CoreResult, ErrorCode, ErrorDetails, ErrorSeverity};
pub use models::{StoreSummary, Transaction};
pub use store::{Clock, IdGenerator, SystemClock, TransactionStore, UuidGenerator};
pub use validator::{require_valid_amount, validate_amount};

/// Re-exported so callers don't need a direct `rust_decimal` dependency
pub use rust_decimal::Decimal;
