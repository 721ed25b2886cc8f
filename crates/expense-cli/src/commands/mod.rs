//! Session command handlers.
//!
//! Each handler validates nothing itself: raw strings go to the ledger,
//! which decides. Handlers only gather input, call the ledger and render.

mod add;
mod delete;
mod edit;
pub mod init;
mod list;

use crate::app::{Flow, Session};
use crate::cli::SessionCommand;
use crate::output::print_snapshot;
use crate::ui::blank_line;

/// Run one parsed session command.
pub fn dispatch(session: &mut Session, command: &SessionCommand) -> anyhow::Result<Flow> {
    match command {
        SessionCommand::Add(args) => add::handle_add(session, args)?,
        SessionCommand::Edit(args) => edit::handle_edit(session, args)?,
        SessionCommand::Save(args) => edit::handle_save(session, args)?,
        SessionCommand::Cancel => edit::handle_cancel(session),
        SessionCommand::Delete(args) => delete::handle_delete(session, args)?,
        SessionCommand::List => list::handle_list(session),
        SessionCommand::Summary => list::handle_summary(session),
        SessionCommand::Categories => list::handle_categories(session),
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Re-render the list after a change (pretty mode only).
fn refresh(session: &Session) {
    if session.ui.mode.is_pretty() {
        blank_line(&session.ui);
        print_snapshot(
            &session.ui,
            &session.ledger.snapshot(),
            session.ledger.edit_target(),
            session.currency(),
        );
    }
}
