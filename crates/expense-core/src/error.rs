//! Error types for expense ledger operations.
//!
//! Every error here is recoverable: the ledger reports it and leaves its
//! state untouched. The CLI layer maps these to user-facing messages and
//! hints.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, ExpenseError>;

/// Core error type for ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    /// Form input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Position or id does not reference an existing record
    #[error("Expense not found: {0}")]
    NotFound(String),

    /// Save was requested while no record is open for editing
    #[error("Invalid expense to edit: no edit in progress")]
    NoActiveEdit,
}

/// Reasons a raw expense form is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Amount or description left blank
    #[error("Please fill in both amount and description")]
    MissingFields,

    /// Amount is not a number
    #[error("Please enter a valid amount greater than 0 (got \"{0}\")")]
    InvalidAmount(String),

    /// Amount is zero or negative
    #[error("Please enter a valid amount greater than 0 (got {0})")]
    NonPositiveAmount(Decimal),

    /// Category outside the fixed set
    #[error("Unknown category \"{0}\"")]
    UnknownCategory(String),

    /// Running total would no longer fit in a decimal
    #[error("Amount is too large: the running total would overflow")]
    TotalOutOfRange,
}

impl ExpenseError {
    /// Whether this error came from form validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, ExpenseError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_transparent() {
        let err = ExpenseError::from(ValidationError::MissingFields);
        assert_eq!(err.to_string(), "Please fill in both amount and description");
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_message() {
        let err = ExpenseError::NotFound("position 3".to_string());
        assert_eq!(err.to_string(), "Expense not found: position 3");
        assert!(!err.is_validation());
    }
}
