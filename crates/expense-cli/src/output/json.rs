//! JSON output formatting for expenses.

use expense_core::{ExpenseRecord, Snapshot, Summary};
use uuid::Uuid;

use crate::ui::{format_date, plain_amount};

/// Convert a record to JSON for output.
///
/// Amounts are strings with two decimals so no precision is lost.
pub fn record_json(record: &ExpenseRecord) -> serde_json::Value {
    serde_json::json!({
        "id": record.id,
        "amount": plain_amount(record.amount),
        "description": record.description,
        "category": record.category,
        "date": format_date(&record.date, false),
    })
}

pub fn summary_json(summary: &Summary) -> serde_json::Value {
    serde_json::json!({
        "total": plain_amount(summary.total),
        "count": summary.count,
    })
}

/// Convert a snapshot to JSON, numbering rows the way `list` shows them.
pub fn snapshot_json(snapshot: &Snapshot, editing: Option<Uuid>) -> serde_json::Value {
    let expenses: Vec<serde_json::Value> = snapshot
        .entries
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut value = record_json(record);
            value["row"] = serde_json::json!(index + 1);
            value
        })
        .collect();
    serde_json::json!({
        "expenses": expenses,
        "summary": summary_json(&snapshot.summary),
        "editing": editing,
    })
}
