//! # Expense Core
//!
//! Core library for Expense - an in-memory expense tracker.
//!
//! This crate owns the ledger state and every rule about it. It never reads
//! input or prints anything; a presentation layer feeds it raw form strings
//! and renders the [`Snapshot`] it derives.
//!
//! ## Architecture
//!
//! - **ledger**: The controller (add, edit, save, cancel, delete, snapshot)
//! - **types**: Records, categories, form input and record references
//! - **validation**: Form validation rules
//! - **snapshot**: Sorted display list and running total
//! - **clock**: Date source for new records
//! - **confirm**: Confirmation capability for deletes

pub mod clock;
pub mod confirm;
pub mod error;
pub mod ledger;
pub mod snapshot;
pub mod types;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use confirm::Confirmation;
pub use error::{ExpenseError, Result, ValidationError};
pub use ledger::ExpenseLedger;
pub use snapshot::{Snapshot, Summary};
pub use types::{Category, EditOutcome, ExpenseInput, ExpenseRecord, RecordRef};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
