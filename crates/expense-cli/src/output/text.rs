//! Text and table output for expenses.

use expense_core::{ExpenseRecord, Snapshot, Summary};
use uuid::Uuid;

use crate::ui::theme::{edit_marker, separator, styled, styles};
use crate::ui::{
    blank_line, format_amount, format_date, header, hint, plain_amount, print, short_id,
    single_line, table, truncate, Column, OutputMode, UiContext,
};

/// Key/value lines describing one record, for receipts.
pub fn record_items(
    ctx: &UiContext,
    record: &ExpenseRecord,
    currency: &str,
) -> Vec<(&'static str, String)> {
    let amount = if ctx.mode.is_pretty() {
        format_amount(record.amount, currency)
    } else {
        plain_amount(record.amount)
    };
    vec![
        ("ID", record.id.to_string()),
        ("Amount", amount),
        ("Description", single_line(&record.description)),
        ("Category", record.category.to_string()),
        ("Date", format_date(&record.date, ctx.mode.is_pretty())),
    ]
}

/// Render the display list and summary.
pub fn print_snapshot(ctx: &UiContext, snapshot: &Snapshot, editing: Option<Uuid>, currency: &str) {
    match ctx.mode {
        OutputMode::Json => {
            println!("{}", super::snapshot_json(snapshot, editing));
        }
        OutputMode::Plain => {
            for (index, record) in snapshot.entries.iter().enumerate() {
                let marker = if Some(record.id) == editing {
                    " editing=true"
                } else {
                    ""
                };
                println!(
                    "row={} id={} date={} amount={} category={}{} description={}",
                    index + 1,
                    record.id,
                    format_date(&record.date, false),
                    plain_amount(record.amount),
                    record.category,
                    marker,
                    single_line(&record.description)
                );
            }
            print_summary(ctx, &snapshot.summary, currency);
        }
        OutputMode::Pretty => {
            let count = snapshot.summary.count;
            let context = format!("{} expense{}", count, if count == 1 { "" } else { "s" });
            print(ctx, &header(ctx, "list", Some(&context)));

            if snapshot.is_empty() {
                let empty = "No expenses found. Add your first expense with `add AMOUNT DESCRIPTION`.";
                print(ctx, &styled(empty, styles::dim(), ctx.color));
                return;
            }

            let columns = [
                Column::right("#"),
                Column::new("Date"),
                Column::right("Amount"),
                Column::new("Description"),
                Column::new("Category"),
                Column::new("ID"),
            ];
            let description_width = ctx.width.saturating_sub(50).max(16);
            let rows: Vec<Vec<String>> = snapshot
                .entries
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    let row_label = if Some(record.id) == editing {
                        format!("{} {}", edit_marker(ctx.unicode), index + 1)
                    } else {
                        (index + 1).to_string()
                    };
                    vec![
                        row_label,
                        format_date(&record.date, true),
                        format_amount(record.amount, currency),
                        truncate(&single_line(&record.description), description_width),
                        record.category.as_str().to_uppercase(),
                        short_id(&record.id),
                    ]
                })
                .collect();
            print(ctx, &table(ctx, &columns, &rows));
            print_summary(ctx, &snapshot.summary, currency);

            if let Some(row) = editing.and_then(|id| {
                snapshot.entries.iter().position(|record| record.id == id)
            }) {
                blank_line(ctx);
                print(
                    ctx,
                    &hint(
                        ctx,
                        &format!(
                            "Editing row {}: `save` to apply {} `cancel` to discard",
                            row + 1,
                            separator(ctx.unicode)
                        ),
                    ),
                );
            }
        }
    }
}

/// Render the running total.
pub fn print_summary(ctx: &UiContext, summary: &Summary, currency: &str) {
    match ctx.mode {
        OutputMode::Json => println!("{}", super::summary_json(summary)),
        OutputMode::Plain => {
            println!("total={}", plain_amount(summary.total));
            println!("count={}", summary.count);
        }
        OutputMode::Pretty => {
            let total = styled(
                &format_amount(summary.total, currency),
                styles::amount(),
                ctx.color,
            );
            let label = styled("Total:", styles::dim(), ctx.color);
            println!(
                "{} {}  {}  {} expense{}",
                label,
                total,
                separator(ctx.unicode),
                summary.count,
                if summary.count == 1 { "" } else { "s" }
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use expense_core::Category;
    use rust_decimal::Decimal;

    #[test]
    fn test_record_items_plain_uses_iso_and_bare_amount() {
        let ctx = UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
            quiet: false,
        };
        let record = ExpenseRecord {
            id: Uuid::nil(),
            amount: Decimal::new(2550, 2),
            description: "Fuel".to_string(),
            category: Category::Fuel,
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        };
        let items = record_items(&ctx, &record, "$");
        assert_eq!(items[1], ("Amount", "25.50".to_string()));
        assert_eq!(items[4], ("Date", "2026-10-19".to_string()));
    }
}
