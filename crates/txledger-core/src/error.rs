//! Error types for txledger-core
//!
//! Failures are invalid input, a missing transaction, an id collision, or a
//! summary total that no longer fits in a `Decimal`. Callers match on
//! the variant (or on [`ErrorCode`]) instead of inspecting messages.

use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request input failed validation
    InvalidInput,
    /// Transaction not found
    TransactionNotFound,
    /// Generated id collided with an existing one
    DuplicateId,
    /// A sum over stored amounts left the decimal range
    AmountOverflow,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidInput => write!(f, "INVALID_INPUT"),
            ErrorCode::TransactionNotFound => write!(f, "TRANSACTION_NOT_FOUND"),
            ErrorCode::DuplicateId => write!(f, "DUPLICATE_ID"),
            ErrorCode::AmountOverflow => write!(f, "AMOUNT_OVERFLOW"),
        }
    }
}

/// Detailed error information for logs and API consumers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational - expected client mistake
    Info,
    /// Warning - operation refused
    Warning,
    /// Error - operation failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

impl From<ErrorSeverity> for log::Level {
    fn from(severity: ErrorSeverity) -> Self {
        match severity {
            ErrorSeverity::Info => log::Level::Info,
            ErrorSeverity::Warning => log::Level::Warn,
            ErrorSeverity::Error => log::Level::Error,
        }
    }
}

/// Main error type for txledger-core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Transaction with ID {id} not found")]
    TransactionNotFound { id: String },

    #[error("Duplicate transaction ID: {id}")]
    DuplicateId { id: String },

    #[error("Total of {count} transaction amounts exceeds the decimal range")]
    AmountOverflow { count: usize },
}

impl CoreError {
    /// Shorthand for an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CoreError::InvalidInput { message: message.into() }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::InvalidInput { .. } => ErrorCode::InvalidInput,
            CoreError::TransactionNotFound { .. } => ErrorCode::TransactionNotFound,
            CoreError::DuplicateId { .. } => ErrorCode::DuplicateId,
            CoreError::AmountOverflow { .. } => ErrorCode::AmountOverflow,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::InvalidInput { .. } => ErrorSeverity::Info,
            CoreError::TransactionNotFound { .. } => ErrorSeverity::Info,
            // Only reachable with a broken id source
            CoreError::DuplicateId { .. } => ErrorSeverity::Error,
            CoreError::AmountOverflow { .. } => ErrorSeverity::Warning,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::InvalidInput { message } => {
                details = details.with_detail(serde_json::json!({ "validation_message": message }));
                details = details.with_suggestion(
                    "The amount must be a decimal number greater than zero.".to_string()
                );
            }
            CoreError::TransactionNotFound { .. } => {
                details = details.with_suggestion(
                    "Check if the transaction ID is correct.".to_string()
                );
                details = details.with_suggestion(
                    "Use GET /transactions to list all transactions.".to_string()
                );
            }
            CoreError::DuplicateId { id } => {
                details = details.with_detail(serde_json::json!({ "id": id }));
                details = details.with_suggestion(
                    "Retry the request; a fresh id will be generated.".to_string()
                );
            }
            CoreError::AmountOverflow { count } => {
                details = details.with_detail(serde_json::json!({ "transactions": count }));
                details = details.with_suggestion(
                    "Individual transactions are still available from GET /transactions.".to_string()
                );
            }
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::InvalidInput.to_string(), "INVALID_INPUT");
        assert_eq!(ErrorCode::TransactionNotFound.to_string(), "TRANSACTION_NOT_FOUND");
        assert_eq!(ErrorCode::DuplicateId.to_string(), "DUPLICATE_ID");
        assert_eq!(ErrorCode::AmountOverflow.to_string(), "AMOUNT_OVERFLOW");
    }

    #[test]
    fn test_not_found_message() {
        let error = CoreError::TransactionNotFound { id: "abc".to_string() };
        assert_eq!(error.to_string(), "Transaction with ID abc not found");
        assert_eq!(error.code(), ErrorCode::TransactionNotFound);
    }

    #[test]
    fn test_core_error_severity() {
        assert_eq!(CoreError::invalid_input("x").severity(), ErrorSeverity::Info);
        let error = CoreError::DuplicateId { id: "1".to_string() };
        assert_eq!(error.severity(), ErrorSeverity::Error);
        assert_eq!(log::Level::from(error.severity()), log::Level::Error);
    }

    #[test]
    fn test_error_details_invalid_input() {
        let details = CoreError::invalid_input("amount must be greater than zero").to_details();

        assert_eq!(details.code, ErrorCode::InvalidInput);
        assert!(details.details.is_some());
        assert!(!details.suggestions.is_empty());
        assert!(details.to_string().starts_with("[INVALID_INPUT]"));
    }

    #[test]
    fn test_error_code_serializes_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::TransactionNotFound).unwrap();
        assert_eq!(json, "\"TRANSACTION_NOT_FOUND\"");
    }
}
