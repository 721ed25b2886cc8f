//! `edit`, `save` and `cancel` command handlers.

use expense_core::{ExpenseError, ExpenseInput, ExpenseRecord};

use crate::app::{resolve_row, Session};
use crate::cli::{EditArgs, SaveArgs};
use crate::helpers::{prompt_category, prompt_text};
use crate::output::{record_items, record_json};
use crate::ui::theme::{styled, styles};
use crate::ui::{format_amount, plain_amount, print, receipt, Badge};

pub fn handle_edit(session: &mut Session, args: &EditArgs) -> anyhow::Result<()> {
    let id = resolve_row(&session.ledger, &args.row)?;
    let record = session.ledger.begin_edit(id)?;

    let ui = &session.ui;
    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "action": "edit",
                "expense": record_json(&record),
            })
        );
    } else if !ui.quiet {
        print(
            ui,
            &receipt(
                ui,
                Badge::Info,
                "Expense loaded for editing.",
                &record_items(ui, &record, session.currency()),
            ),
        );
    }

    if session.interactive {
        let form = match prompt_edit_form(&record) {
            Ok(form) => form,
            Err(err) => {
                session.ledger.cancel_edit();
                return Err(err);
            }
        };
        return save_form(session, &form);
    }

    super::refresh(session);
    Ok(())
}

pub fn handle_save(session: &mut Session, args: &SaveArgs) -> anyhow::Result<()> {
    // Omitted fields keep what the edit loaded, like a prefilled form.
    let omitted = args.amount.is_none() || args.description.is_empty();
    if omitted && !session.ledger.is_editing() {
        return Err(ExpenseError::NoActiveEdit.into());
    }
    let draft = session
        .ledger
        .editing()
        .map(ExpenseInput::from)
        .unwrap_or_default();
    let form = ExpenseInput {
        amount: args.amount.clone().unwrap_or(draft.amount),
        description: if args.description.is_empty() {
            draft.description
        } else {
            args.description.join(" ")
        },
        category: args.category.clone().unwrap_or(draft.category),
    };
    save_form(session, &form)
}

pub fn handle_cancel(session: &mut Session) {
    let was_editing = session.ledger.is_editing();
    session.ledger.cancel_edit();

    let ui = &session.ui;
    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "action": "cancel",
                "was_editing": was_editing,
            })
        );
    } else if !ui.quiet {
        let message = if was_editing {
            "Edit cancelled."
        } else {
            "Nothing to cancel."
        };
        print(ui, &receipt(ui, Badge::Info, message, &[]));
    }

    if was_editing {
        super::refresh(session);
    }
}

fn prompt_edit_form(record: &ExpenseRecord) -> anyhow::Result<ExpenseInput> {
    let current = ExpenseInput::from(record);
    Ok(ExpenseInput {
        amount: prompt_text("Amount", Some(&current.amount))?,
        description: prompt_text("Description", Some(&current.description))?,
        category: prompt_category(record.category)?,
    })
}

fn save_form(session: &mut Session, form: &ExpenseInput) -> anyhow::Result<()> {
    let outcome = session.ledger.save_edit(form)?;

    let ui = &session.ui;
    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "action": "save",
                "previous": record_json(&outcome.previous),
                "updated": record_json(&outcome.updated),
            })
        );
    } else if !ui.quiet {
        let arrow = if ui.unicode { "\u{2192}" } else { "->" };
        let message = format!(
            "Expense updated: \"{}\" {} \"{}\"",
            outcome.previous.description, arrow, outcome.updated.description
        );
        let mut items = record_items(ui, &outcome.updated, session.currency());
        if outcome.previous.amount != outcome.updated.amount {
            let before = if ui.mode.is_pretty() {
                format_amount(outcome.previous.amount, session.currency())
            } else {
                plain_amount(outcome.previous.amount)
            };
            items.push(("Previous amount", before));
        }
        print(ui, &receipt(ui, Badge::Ok, &message, &items));
        if ui.mode.is_pretty() && outcome.previous.category != outcome.updated.category {
            let note = format!(
                "Category {} {} {}",
                outcome.previous.category, arrow, outcome.updated.category
            );
            print(ui, &styled(&note, styles::dim(), ui.color));
        }
    }

    super::refresh(session);
    Ok(())
}
