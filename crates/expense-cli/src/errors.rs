//! CLI error types for structured error handling.
//!
//! This module provides typed errors that carry a hint and map to specific
//! exit codes, and translates core ledger errors into them.

use std::fmt;

use expense_core::ExpenseError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, expense row, etc.)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// The action needs a confirmation that could not be obtained
    Refused { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create a Refused error with message and hint.
    pub fn refused(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::Refused {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CliError::NotFound { message, .. }
            | CliError::InvalidInput { message, .. }
            | CliError::Refused { message, .. } => message,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } | CliError::Refused { hint, .. } => Some(hint),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::Refused { .. } => exit_codes::REFUSED,
        }
    }
}

impl From<&ExpenseError> for CliError {
    fn from(err: &ExpenseError) -> Self {
        match err {
            ExpenseError::Validation(_) => CliError::invalid_input_with_hint(
                err.to_string(),
                "add AMOUNT DESCRIPTION [-c CATEGORY]  \u{00B7}  `categories` lists categories",
            ),
            ExpenseError::NotFound(_) => {
                CliError::not_found(err.to_string(), "Run `list` to see row numbers.")
            }
            ExpenseError::NoActiveEdit => CliError::invalid_input_with_hint(
                err.to_string(),
                "Run `edit ROW` first to load an expense.",
            ),
        }
    }
}

/// Resolve the message and hint to show for any command error.
pub fn describe(err: &anyhow::Error) -> (String, Option<String>) {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return (
            cli_err.message().to_string(),
            cli_err.hint().map(str::to_string),
        );
    }
    if let Some(core_err) = err.downcast_ref::<ExpenseError>() {
        let cli_err = CliError::from(core_err);
        return (
            cli_err.message().to_string(),
            cli_err.hint().map(str::to_string),
        );
    }
    (format!("{:#}", err), None)
}
