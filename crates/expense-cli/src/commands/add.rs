//! `add` command handler.

use expense_core::ExpenseInput;

use crate::app::Session;
use crate::cli::AddArgs;
use crate::helpers::{parse_date, prompt_category, prompt_text};
use crate::output::{record_items, record_json};
use crate::ui::{print, receipt, Badge};

pub fn handle_add(session: &mut Session, args: &AddArgs) -> anyhow::Result<()> {
    let mut input = ExpenseInput {
        amount: args.amount.clone().unwrap_or_default(),
        description: args.description.join(" "),
        category: args
            .category
            .clone()
            .unwrap_or_else(|| session.default_category.as_str().to_string()),
    };

    // Fill the blanks like a form would; everything else goes to the ledger as typed.
    let missing_fields = args.amount.is_none() || args.description.is_empty();
    if session.interactive && missing_fields {
        if args.amount.is_none() {
            input.amount = prompt_text("Amount", None)?;
        }
        if args.description.is_empty() {
            input.description = prompt_text("Description", None)?;
        }
        if args.category.is_none() {
            input.category = prompt_category(session.default_category)?;
        }
    }

    let record = match args.date.as_deref() {
        Some(value) => {
            let date = parse_date(value)?;
            session.ledger.add_dated(&input, date)?
        }
        None => session.ledger.add(&input)?,
    };

    let ui = &session.ui;
    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "action": "add",
                "expense": record_json(&record),
            })
        );
    } else if !ui.quiet {
        print(
            ui,
            &receipt(
                ui,
                Badge::Ok,
                "Expense added successfully!",
                &record_items(ui, &record, session.currency()),
            ),
        );
    }

    super::refresh(session);
    Ok(())
}
