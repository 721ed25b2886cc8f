//! Read-only view of the ledger for display.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::ExpenseRecord;

/// Running total over all records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub total: Decimal,
    pub count: usize,
}

/// Display list plus summary, derived from the ledger at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Snapshot {
    /// Newest date first; equal dates keep insertion order
    pub entries: Vec<ExpenseRecord>,
    pub summary: Summary,
}

impl Snapshot {
    pub(crate) fn of(records: &[ExpenseRecord]) -> Self {
        let mut entries = records.to_vec();
        // sort_by is stable, so same-day records stay in insertion order.
        entries.sort_by(|a, b| b.date.cmp(&a.date));

        // The ledger refuses records that would overflow the total.
        let summary = Summary {
            total: checked_total(records.iter().map(|record| record.amount))
                .unwrap_or(Decimal::MAX),
            count: records.len(),
        };

        Self { entries, summary }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record shown at a 1-based display row.
    pub fn row(&self, row: usize) -> Option<&ExpenseRecord> {
        row.checked_sub(1).and_then(|index| self.entries.get(index))
    }
}

/// Sum of `amounts`, or `None` if it does not fit in a `Decimal`.
pub(crate) fn checked_total(amounts: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn record(amount: i64, day: u32) -> ExpenseRecord {
        ExpenseRecord {
            id: Uuid::now_v7(),
            amount: Decimal::new(amount, 0),
            description: format!("item {}", amount),
            category: Category::Other,
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
        }
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::of(&[]);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.summary, Summary::default());
    }

    #[test]
    fn test_sorted_newest_first_and_stable() {
        let records = vec![record(1, 3), record(2, 5), record(3, 3), record(4, 5)];
        let snapshot = Snapshot::of(&records);

        let amounts: Vec<i64> = snapshot
            .entries
            .iter()
            .map(|r| r.amount.mantissa() as i64)
            .collect();
        assert_eq!(amounts, vec![2, 4, 1, 3]);
        assert_eq!(snapshot.summary.total, Decimal::new(10, 0));
        assert_eq!(snapshot.summary.count, 4);
    }

    #[test]
    fn test_checked_total_reports_overflow() {
        assert_eq!(
            checked_total([Decimal::new(25, 0), Decimal::new(1050, 2)]),
            Some(Decimal::new(3550, 2))
        );
        assert_eq!(checked_total([Decimal::MAX, Decimal::ONE]), None);
    }

    #[test]
    fn test_row_is_one_based() {
        let records = vec![record(1, 1), record(2, 2)];
        let snapshot = Snapshot::of(&records);
        assert_eq!(snapshot.row(1).map(|r| r.id), Some(records[1].id));
        assert_eq!(snapshot.row(2).map(|r| r.id), Some(records[0].id));
        assert!(snapshot.row(0).is_none());
        assert!(snapshot.row(3).is_none());
    }
}
