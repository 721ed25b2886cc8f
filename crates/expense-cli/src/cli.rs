use clap::{Args, Parser, Subcommand};

use expense_core::VERSION;

/// Expense - an in-memory expense tracker for the terminal
#[derive(Parser)]
#[command(name = "expense")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "EXPENSE_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON (one document per command)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, global = true, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_input: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `init-config` command
#[derive(Args)]
pub struct InitConfigArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    InitConfig(InitConfigArgs),
}

/// One line typed into a session.
#[derive(Parser)]
#[command(name = "expense", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Arguments for the `add` session command
#[derive(Args)]
pub struct AddArgs {
    /// Amount (must be greater than 0)
    #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
    pub amount: Option<String>,

    /// Description (remaining words are joined)
    #[arg(value_name = "DESCRIPTION")]
    pub description: Vec<String>,

    /// Category (defaults to the configured category)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Date of the expense (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `edit` session command
#[derive(Args)]
pub struct EditArgs {
    /// Row number from `list`, or an expense ID (full or 8+ char prefix)
    #[arg(value_name = "ROW")]
    pub row: String,
}

/// Arguments for the `save` session command
#[derive(Args)]
pub struct SaveArgs {
    /// New amount (keeps the loaded value when omitted)
    #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
    pub amount: Option<String>,

    /// New description (keeps the loaded value when omitted)
    #[arg(value_name = "DESCRIPTION")]
    pub description: Vec<String>,

    /// New category (keeps the loaded value when omitted)
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the `delete` session command
#[derive(Args)]
pub struct DeleteArgs {
    /// Row number from `list`, or an expense ID (full or 8+ char prefix)
    #[arg(value_name = "ROW")]
    pub row: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Add a new expense
    Add(AddArgs),

    /// Load an expense for editing
    Edit(EditArgs),

    /// Save the expense being edited
    Save(SaveArgs),

    /// Discard the current edit
    Cancel,

    /// Delete an expense (asks for confirmation)
    Delete(DeleteArgs),

    /// List expenses, newest first, with the running total
    List,

    /// Show the running total only
    Summary,

    /// List the available categories
    Categories,

    /// End the session (all expenses are discarded)
    #[command(alias = "exit")]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: &[&str]) -> SessionCommand {
        SessionLine::try_parse_from(tokens.iter().copied())
            .expect("line should parse")
            .command
    }

    #[test]
    fn test_add_joins_description_words() {
        match parse(&["add", "25.50", "Fuel", "for", "car", "-c", "fuel"]) {
            SessionCommand::Add(args) => {
                assert_eq!(args.amount.as_deref(), Some("25.50"));
                assert_eq!(args.description.join(" "), "Fuel for car");
                assert_eq!(args.category.as_deref(), Some("fuel"));
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_add_accepts_negative_amount_token() {
        match parse(&["add", "-5", "Refund"]) {
            SessionCommand::Add(args) => assert_eq!(args.amount.as_deref(), Some("-5")),
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_delete_yes_flag() {
        match parse(&["delete", "2", "--yes"]) {
            SessionCommand::Delete(args) => {
                assert_eq!(args.row, "2");
                assert!(args.yes);
            }
            _ => panic!("expected delete"),
        }
    }

    #[test]
    fn test_exit_alias() {
        assert!(matches!(parse(&["exit"]), SessionCommand::Quit));
    }

    #[test]
    fn test_unknown_command_is_error() {
        assert!(SessionLine::try_parse_from(["frobnicate"]).is_err());
    }
}
