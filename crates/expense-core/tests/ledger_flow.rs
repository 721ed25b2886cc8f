use chrono::NaiveDate;
use rust_decimal::Decimal;

use expense_core::{
    Category, ExpenseError, ExpenseInput, ExpenseLedger, ExpenseRecord, FixedClock,
    ValidationError,
};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).expect("valid date")
}

fn new_ledger() -> ExpenseLedger<FixedClock> {
    ExpenseLedger::with_clock(FixedClock::new(date(10, 19)))
}

fn dec(value: &str) -> Decimal {
    value.parse().expect("decimal literal")
}

#[test]
fn test_add_grows_by_one_and_is_retrievable() {
    let mut ledger = new_ledger();

    for (amount, description) in [("1", "a"), ("0.01", "b"), ("999999.99", "c")] {
        let before = ledger.len();
        let record = ledger
            .add(&ExpenseInput::new(amount, description))
            .expect("valid add should succeed");
        assert_eq!(ledger.len(), before + 1);
        assert_eq!(ledger.get(&record.id), Some(&record));
    }
}

#[test]
fn test_add_rejects_bad_input_without_mutation() {
    let mut ledger = new_ledger();
    ledger.add(&ExpenseInput::new("5", "keep")).expect("seed");
    let before: Vec<ExpenseRecord> = ledger.records().to_vec();

    let cases = [
        ("0", "zero", ValidationError::NonPositiveAmount(Decimal::ZERO)),
        ("-3.5", "negative", ValidationError::NonPositiveAmount(dec("-3.5"))),
        ("12", "   ", ValidationError::MissingFields),
        ("", "no amount", ValidationError::MissingFields),
        ("ten", "words", ValidationError::InvalidAmount("ten".to_string())),
    ];

    for (amount, description, expected) in cases {
        let err = ledger
            .add(&ExpenseInput::new(amount, description))
            .expect_err("invalid add should fail");
        assert_eq!(err, ExpenseError::Validation(expected));
        assert_eq!(ledger.records(), before.as_slice());
    }
}

#[test]
fn test_add_rejects_total_overflow_without_mutation() {
    let mut ledger = new_ledger();
    let max = Decimal::MAX.to_string();
    let first = ledger
        .add(&ExpenseInput::new(max.as_str(), "everything"))
        .expect("largest amount fits on its own");

    let err = ledger
        .add(&ExpenseInput::new(max.as_str(), "one more"))
        .expect_err("total would overflow");
    assert_eq!(
        err,
        ExpenseError::Validation(ValidationError::TotalOutOfRange)
    );
    assert_eq!(ledger.records(), std::slice::from_ref(&first));

    let summary = ledger.snapshot().summary;
    assert_eq!(summary.total, Decimal::MAX);
    assert_eq!(summary.count, 1);
}

#[test]
fn test_save_edit_rejects_total_overflow() {
    let mut ledger = new_ledger();
    let max = Decimal::MAX.to_string();
    ledger
        .add(&ExpenseInput::new(max.as_str(), "big"))
        .expect("add big");
    let small = ledger.add(&ExpenseInput::new("1", "small")).expect_err("overflow");
    assert_eq!(small, ExpenseError::Validation(ValidationError::TotalOutOfRange));

    // Replacing a record's own amount does not count it twice.
    ledger.begin_edit(0usize).expect("begin edit");
    let outcome = ledger
        .save_edit(&ExpenseInput::new(max.as_str(), "still big"))
        .expect("same total fits");
    assert_eq!(outcome.updated.amount, Decimal::MAX);

    let other = ledger.add(&ExpenseInput::new("2", "two")).expect_err("overflow");
    assert_eq!(other, ExpenseError::Validation(ValidationError::TotalOutOfRange));

    ledger.begin_edit(0usize).expect("begin edit");
    ledger
        .save_edit(&ExpenseInput::new("10", "smaller"))
        .expect("shrink");
    ledger
        .add(&ExpenseInput::new("5", "fits now"))
        .expect("room after shrinking");
    assert_eq!(ledger.snapshot().summary.total, dec("15"));
}

#[test]
fn test_unknown_category_is_rejected() {
    let mut ledger = new_ledger();
    let err = ledger
        .add(&ExpenseInput::new("5", "Rent").with_category("housing"))
        .expect_err("unknown category should fail");
    assert_eq!(
        err,
        ExpenseError::Validation(ValidationError::UnknownCategory("housing".to_string()))
    );
    assert!(ledger.is_empty());
}

#[test]
fn test_delete_removes_from_snapshot_and_clears_edit() {
    let mut ledger = new_ledger();
    let a = ledger.add(&ExpenseInput::new("1", "a")).expect("add a");
    let b = ledger.add(&ExpenseInput::new("2", "b")).expect("add b");

    ledger.begin_edit(b.id).expect("begin edit");
    let removed = ledger.delete(b.id).expect("delete");
    assert_eq!(removed.id, b.id);
    assert_eq!(ledger.edit_target(), None);

    let snapshot = ledger.snapshot();
    assert!(snapshot.entries.iter().all(|r| r.id != b.id));
    assert_eq!(snapshot.entries.len(), 1);
    assert_eq!(snapshot.entries[0].id, a.id);
}

#[test]
fn test_delete_unknown_reference_is_not_found() {
    let mut ledger = new_ledger();
    ledger.add(&ExpenseInput::new("1", "a")).expect("add");

    let err = ledger.delete(5usize).expect_err("out of range");
    assert!(matches!(err, ExpenseError::NotFound(_)));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_save_edit_changes_only_editable_fields() {
    let mut ledger = new_ledger();
    let original = ledger
        .add(&ExpenseInput::new("25.50", "Fuel").with_category("fuel"))
        .expect("add");
    ledger.clock().set(date(10, 25));

    let loaded = ledger.begin_edit(0usize).expect("begin edit");
    assert_eq!(loaded, original);
    let mut form = ExpenseInput::from(&loaded);
    form.amount = "30".to_string();
    form.description = "Fuel (full tank)".to_string();
    form.category = "transport".to_string();

    let outcome = ledger.save_edit(&form).expect("save");
    assert_eq!(outcome.previous, original);
    assert_eq!(outcome.updated.id, original.id);
    assert_eq!(outcome.updated.date, original.date);
    assert_eq!(outcome.updated.amount, dec("30"));
    assert_eq!(outcome.updated.description, "Fuel (full tank)");
    assert_eq!(outcome.updated.category, Category::Transport);
    assert!(!ledger.is_editing());
    assert_eq!(ledger.get(&original.id), Some(&outcome.updated));
}

#[test]
fn test_save_without_begin_edit_fails() {
    let mut ledger = new_ledger();
    ledger.add(&ExpenseInput::new("1", "a")).expect("add");

    let err = ledger
        .save_edit(&ExpenseInput::new("2", "b"))
        .expect_err("no edit in progress");
    assert_eq!(err, ExpenseError::NoActiveEdit);

    ledger.begin_edit(0usize).expect("begin");
    ledger.cancel_edit();
    let err = ledger
        .save_edit(&ExpenseInput::new("2", "b"))
        .expect_err("edit was cancelled");
    assert_eq!(err, ExpenseError::NoActiveEdit);
    assert_eq!(ledger.records()[0].description, "a");
}

#[test]
fn test_snapshot_orders_by_date_desc_and_is_stable() {
    let mut ledger = new_ledger();
    let inputs = [
        ("first", date(10, 1)),
        ("second", date(10, 3)),
        ("third", date(10, 1)),
        ("fourth", date(10, 2)),
        ("fifth", date(10, 3)),
    ];
    for (description, when) in inputs {
        ledger
            .add_dated(&ExpenseInput::new("1", description), when)
            .expect("add");
    }

    let snapshot = ledger.snapshot();
    let order: Vec<&str> = snapshot
        .entries
        .iter()
        .map(|r| r.description.as_str())
        .collect();
    assert_eq!(order, vec!["second", "fifth", "fourth", "first", "third"]);
    assert!(snapshot
        .entries
        .windows(2)
        .all(|pair| pair[0].date >= pair[1].date));

    // Storage order is untouched by the derivation.
    let stored: Vec<&str> = ledger
        .records()
        .iter()
        .map(|r| r.description.as_str())
        .collect();
    assert_eq!(stored, vec!["first", "second", "third", "fourth", "fifth"]);
}

#[test]
fn test_running_total_example() {
    let mut ledger = new_ledger();

    let fuel = ledger
        .add(&ExpenseInput::new("25.50", "Fuel").with_category("fuel"))
        .expect("add fuel");
    let summary = ledger.snapshot().summary;
    assert_eq!(summary.total, dec("25.50"));
    assert_eq!(summary.count, 1);

    ledger
        .add(&ExpenseInput::new("10", "Snack").with_category("food"))
        .expect("add snack");
    let summary = ledger.snapshot().summary;
    assert_eq!(summary.total, dec("35.50"));
    assert_eq!(summary.count, 2);

    ledger.delete(fuel.id).expect("delete fuel");
    let summary = ledger.snapshot().summary;
    assert_eq!(summary.total, dec("10"));
    assert_eq!(summary.count, 1);
}

#[test]
fn test_snapshot_does_not_touch_edit_state() {
    let mut ledger = new_ledger();
    let a = ledger.add(&ExpenseInput::new("1", "a")).expect("add");
    ledger.begin_edit(a.id).expect("begin");

    let _ = ledger.snapshot();
    assert_eq!(ledger.edit_target(), Some(a.id));
}
