//! `delete` command handler.

use crate::app::{resolve_row, Session};
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::PromptConfirmation;
use crate::output::record_json;
use crate::ui::{print, receipt, Badge};

pub fn handle_delete(session: &mut Session, args: &DeleteArgs) -> anyhow::Result<()> {
    let id = resolve_row(&session.ledger, &args.row)?;

    let removed = if args.yes {
        Some(session.ledger.delete(id)?)
    } else if session.interactive {
        let mut confirmation = PromptConfirmation {
            currency: &session.config.ui.currency_symbol,
        };
        session.ledger.delete_confirmed(id, &mut confirmation)?
    } else {
        return Err(CliError::refused(
            "Refusing to delete without confirmation",
            "Pass --yes to confirm in a non-interactive session.",
        )
        .into());
    };

    let ui = &session.ui;
    match &removed {
        Some(record) => {
            if ui.mode.is_json() {
                println!(
                    "{}",
                    serde_json::json!({
                        "status": "ok",
                        "action": "delete",
                        "deleted": true,
                        "expense": record_json(record),
                    })
                );
            } else if !ui.quiet {
                let message = format!("Expense \"{}\" deleted successfully!", record.description);
                print(ui, &receipt(ui, Badge::Ok, &message, &[]));
            }
            super::refresh(session);
        }
        None => {
            if ui.mode.is_json() {
                println!(
                    "{}",
                    serde_json::json!({
                        "status": "ok",
                        "action": "delete",
                        "deleted": false,
                    })
                );
            } else if !ui.quiet {
                print(ui, &receipt(ui, Badge::Info, "Delete cancelled.", &[]));
            }
        }
    }
    Ok(())
}
