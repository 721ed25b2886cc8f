//! The expense ledger controller.
//!
//! [`ExpenseLedger`] owns the in-memory list of records and the single
//! piece of edit-mode state. It is the only code that mutates records:
//! records are created by [`add`](ExpenseLedger::add), changed by
//! [`save_edit`](ExpenseLedger::save_edit) and removed by
//! [`delete`](ExpenseLedger::delete). Every failing call leaves the ledger
//! exactly as it was.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::confirm::Confirmation;
use crate::error::{ExpenseError, Result, ValidationError};
use crate::snapshot::{checked_total, Snapshot};
use crate::types::{EditOutcome, ExpenseInput, ExpenseRecord, RecordRef};

/// In-memory expense ledger with add/edit/delete and a derived snapshot.
#[derive(Debug)]
pub struct ExpenseLedger<C: Clock = SystemClock> {
    records: Vec<ExpenseRecord>,
    /// Id of the record open for editing. Always present in `records`.
    edit_target: Option<Uuid>,
    clock: C,
}

impl ExpenseLedger<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ExpenseLedger<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ExpenseLedger<C> {
    /// Create an empty ledger that dates new records with `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            records: Vec::new(),
            edit_target: None,
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Validate the form and append a record dated today.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Validation` if the amount is blank, not a
    /// number or not positive, the description is blank, the category
    /// is unknown, or the running total would overflow.
    pub fn add(&mut self, input: &ExpenseInput) -> Result<ExpenseRecord> {
        let today = self.clock.today();
        self.add_dated(input, today)
    }

    /// Validate the form and append a record with an explicit date.
    pub fn add_dated(&mut self, input: &ExpenseInput, date: NaiveDate) -> Result<ExpenseRecord> {
        let valid = input.validate()?;
        self.check_total(None, valid.amount)?;
        let record = ExpenseRecord {
            id: self.fresh_id(),
            amount: valid.amount,
            description: valid.description,
            category: valid.category,
            date,
        };
        self.records.push(record.clone());
        debug!(id = %record.id, amount = %record.amount, total = self.records.len(), "expense added");
        Ok(record)
    }

    /// Open a record for editing and return its current values.
    ///
    /// Starting a new edit while another is open retargets the edit.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NotFound` if `reference` does not resolve.
    pub fn begin_edit(&mut self, reference: impl Into<RecordRef>) -> Result<ExpenseRecord> {
        let index = self.resolve(reference.into())?;
        let record = self.records[index].clone();
        self.edit_target = Some(record.id);
        debug!(id = %record.id, "editing expense");
        Ok(record)
    }

    /// Apply the form to the record being edited and leave edit mode.
    ///
    /// Only amount, description and category change; id and date are kept.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Validation` for a bad form (checked first),
    /// then `ExpenseError::NoActiveEdit` if nothing is being edited.
    pub fn save_edit(&mut self, input: &ExpenseInput) -> Result<EditOutcome> {
        let valid = input.validate()?;
        let index = self
            .edit_target
            .and_then(|id| self.position_of(&id))
            .ok_or(ExpenseError::NoActiveEdit)?;
        self.check_total(Some(index), valid.amount)?;

        let record = &mut self.records[index];
        let previous = record.clone();
        record.amount = valid.amount;
        record.description = valid.description;
        record.category = valid.category;
        let updated = record.clone();

        self.edit_target = None;
        debug!(id = %updated.id, "expense updated");
        Ok(EditOutcome { previous, updated })
    }

    /// Leave edit mode without changing anything.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.edit_target.take() {
            debug!(%id, "edit cancelled");
        }
    }

    /// Remove a record and return it.
    ///
    /// Callers are expected to have obtained confirmation already; see
    /// [`delete_confirmed`](Self::delete_confirmed) for the prompting variant.
    /// If the removed record was open for editing, edit mode ends.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NotFound` if `reference` does not resolve.
    pub fn delete(&mut self, reference: impl Into<RecordRef>) -> Result<ExpenseRecord> {
        let index = self.resolve(reference.into())?;
        Ok(self.remove_at(index))
    }

    /// Remove a record only if `confirmation` agrees.
    ///
    /// The reference is resolved before asking, so a stale reference fails
    /// without a prompt. Returns `Ok(None)` when the caller declines.
    pub fn delete_confirmed(
        &mut self,
        reference: impl Into<RecordRef>,
        confirmation: &mut impl Confirmation,
    ) -> Result<Option<ExpenseRecord>> {
        let index = self.resolve(reference.into())?;
        if !confirmation.confirm(&self.records[index]) {
            debug!(id = %self.records[index].id, "delete declined");
            return Ok(None);
        }
        Ok(Some(self.remove_at(index)))
    }

    /// Sorted display list and running total.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.records)
    }

    pub fn get(&self, id: &Uuid) -> Option<&ExpenseRecord> {
        self.records.iter().find(|record| record.id == *id)
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn edit_target(&self) -> Option<Uuid> {
        self.edit_target
    }

    /// The record currently open for editing, if any.
    pub fn editing(&self) -> Option<&ExpenseRecord> {
        self.edit_target.and_then(|id| self.get(&id))
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    fn remove_at(&mut self, index: usize) -> ExpenseRecord {
        let removed = self.records.remove(index);
        if self.edit_target == Some(removed.id) {
            self.edit_target = None;
            debug!(id = %removed.id, "deleted record was being edited; edit cleared");
        }
        debug!(id = %removed.id, remaining = self.records.len(), "expense deleted");
        removed
    }

    fn resolve(&self, reference: RecordRef) -> Result<usize> {
        let found = match reference {
            RecordRef::Position(index) => (index < self.records.len()).then_some(index),
            RecordRef::Id(id) => self.position_of(&id),
        };
        found.ok_or_else(|| {
            warn!(%reference, "expense not found");
            ExpenseError::NotFound(reference.to_string())
        })
    }

    /// Fail if adding `amount`, in place of the record at `replacing`,
    /// would push the running total past `Decimal::MAX`.
    fn check_total(&self, replacing: Option<usize>, amount: Decimal) -> Result<()> {
        let others = self
            .records
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != replacing)
            .map(|(_, record)| record.amount);
        match checked_total(others.chain(std::iter::once(amount))) {
            Some(_) => Ok(()),
            None => {
                warn!(%amount, "running total would overflow");
                Err(ValidationError::TotalOutOfRange.into())
            }
        }
    }

    fn position_of(&self, id: &Uuid) -> Option<usize> {
        self.records.iter().position(|record| record.id == *id)
    }

    fn fresh_id(&self) -> Uuid {
        // Ids must stay unique even if two v7 ids ever collide.
        loop {
            let id = Uuid::now_v7();
            if self.position_of(&id).is_none() {
                return id;
            }
        }
    }
}
