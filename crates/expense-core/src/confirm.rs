//! Confirmation capability for destructive actions.

use crate::types::ExpenseRecord;

/// Asks whoever drives the ledger whether a record may be deleted.
///
/// The ledger never prompts on its own; a presentation layer hands one of
/// these to [`ExpenseLedger::delete_confirmed`](crate::ExpenseLedger::delete_confirmed).
pub trait Confirmation {
    fn confirm(&mut self, record: &ExpenseRecord) -> bool;
}

impl<F> Confirmation for F
where
    F: FnMut(&ExpenseRecord) -> bool,
{
    fn confirm(&mut self, record: &ExpenseRecord) -> bool {
        self(record)
    }
}
