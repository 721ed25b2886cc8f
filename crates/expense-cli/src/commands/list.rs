//! `list`, `summary` and `categories` command handlers.

use expense_core::Category;

use crate::app::Session;
use crate::output::{print_snapshot, print_summary};
use crate::ui::theme::{styled, styles};
use crate::ui::{header, print, OutputMode};

pub fn handle_list(session: &Session) {
    print_snapshot(
        &session.ui,
        &session.ledger.snapshot(),
        session.ledger.edit_target(),
        session.currency(),
    );
}

pub fn handle_summary(session: &Session) {
    print_summary(
        &session.ui,
        &session.ledger.snapshot().summary,
        session.currency(),
    );
}

pub fn handle_categories(session: &Session) {
    let ui = &session.ui;
    let default = session.default_category;
    match ui.mode {
        OutputMode::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "categories": Category::ALL,
                    "default": default,
                })
            );
        }
        OutputMode::Plain => {
            for category in Category::ALL {
                if category == default {
                    println!("category={} default=true", category);
                } else {
                    println!("category={}", category);
                }
            }
        }
        OutputMode::Pretty => {
            print(ui, &header(ui, "categories", None));
            for category in Category::ALL {
                if category == default {
                    let note = styled("(default)", styles::dim(), ui.color);
                    println!("  {} {}", category, note);
                } else {
                    println!("  {}", category);
                }
            }
        }
    }
}
