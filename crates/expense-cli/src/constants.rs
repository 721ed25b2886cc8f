//! Constants used throughout the CLI.

/// Environment variable holding the log filter (e.g. `debug`, `expense_core=trace`).
pub const LOG_ENV: &str = "EXPENSE_LOG";

/// Log filter used when `EXPENSE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Prompt shown before each session line on a TTY.
pub const SESSION_PROMPT: &str = "expense> ";

/// Minimum length of an ID prefix accepted as a row reference.
pub const MIN_ID_PREFIX: usize = 8;

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// A scripted (`--no-input`) session had at least one failing command.
    pub const SESSION_FAILED: i32 = 1;

    /// Resource not found (config file, expense row).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Action refused (e.g. delete without confirmation).
    pub const REFUSED: i32 = 5;
}
