//! The interactive session.
//!
//! A session owns the only [`ExpenseLedger`] of the process. It reads one
//! command per line, runs it to completion, prints the result and moves on.
//! Command errors are reported and never end the session.

use std::io::{BufRead, IsTerminal, Write};

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use expense_core::{Category, ExpenseLedger};

use crate::cli::{Cli, SessionLine};
use crate::commands;
use crate::config::ExpenseConfig;
use crate::constants::SESSION_PROMPT;
use crate::errors::describe;
use crate::helpers::split_line;
use crate::ui::{print_error, FormatFlag, UiContext};

use super::clock::ZonedClock;

/// What the session does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// State for one run of the expense tracker.
pub struct Session {
    pub ledger: ExpenseLedger<ZonedClock>,
    pub ui: UiContext,
    pub config: ExpenseConfig,
    /// Category applied when `add` gets none
    pub default_category: Category,
    /// Whether prompts may be shown
    pub interactive: bool,
    /// Number of commands that failed so far
    pub failures: usize,
}

impl Session {
    /// Build a session from CLI flags and loaded config.
    pub fn new(cli: &Cli, config: ExpenseConfig) -> anyhow::Result<Self> {
        let format = cli
            .format
            .as_deref()
            .map(str::parse::<FormatFlag>)
            .transpose()?;
        let ui = UiContext::from_env(cli.json, format, cli.no_color, cli.ascii, cli.quiet);
        let clock = ZonedClock::from_config(config.ui.timezone.as_deref())?;
        let default_category = config.default_category()?;
        let interactive = std::io::stdin().is_terminal() && !cli.no_input;

        Ok(Self {
            ledger: ExpenseLedger::with_clock(clock),
            ui,
            config,
            default_category,
            interactive,
            failures: 0,
        })
    }

    /// Currency symbol for display.
    pub fn currency(&self) -> &str {
        &self.config.ui.currency_symbol
    }

    /// Read and run commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> anyhow::Result<()> {
        let show_prompt = self.interactive && !self.ui.mode.is_json();
        let mut line = String::new();
        loop {
            if show_prompt {
                print!("{}", SESSION_PROMPT);
                std::io::stdout().flush()?;
            }
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            if self.execute_line(&line) == Flow::Quit {
                break;
            }
        }
        debug!(
            expenses = self.ledger.len(),
            failures = self.failures,
            "session ended"
        );
        Ok(())
    }

    /// Parse and run one input line.
    pub fn execute_line(&mut self, line: &str) -> Flow {
        let tokens = match split_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.report(&err);
                return Flow::Continue;
            }
        };
        if tokens.is_empty() || tokens[0].starts_with('#') {
            return Flow::Continue;
        }

        let parsed = match SessionLine::try_parse_from(&tokens) {
            Ok(parsed) => parsed,
            Err(err) => {
                match err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        if !self.ui.mode.is_json() {
                            println!("{}", err);
                        }
                    }
                    _ => {
                        self.failures += 1;
                        let message = err.to_string();
                        let first_line = message.lines().next().unwrap_or("Invalid command");
                        let first_line = first_line.trim_start_matches("error: ");
                        print_error(&self.ui, first_line, Some("Type `help` for commands."));
                    }
                }
                return Flow::Continue;
            }
        };

        match commands::dispatch(self, &parsed.command) {
            Ok(flow) => flow,
            Err(err) => {
                self.report(&err);
                Flow::Continue
            }
        }
    }

    fn report(&mut self, err: &anyhow::Error) {
        self.failures += 1;
        let (message, hint) = describe(err);
        print_error(&self.ui, &message, hint.as_deref());
    }
}
