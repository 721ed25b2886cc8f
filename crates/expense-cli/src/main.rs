//! Expense CLI - an in-memory expense tracker for the terminal
//!
//! Starts a session that reads one command per line. Expenses live only for
//! the lifetime of the process.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::{load_config, Session};
use crate::cli::{Cli, Commands};
use crate::constants::{exit_codes, DEFAULT_LOG_FILTER, LOG_ENV};
use crate::errors::{describe, CliError};
use crate::ui::{print_error, FormatFlag, UiContext};

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn ui_context(cli: &Cli) -> anyhow::Result<UiContext> {
    let format = cli
        .format
        .as_deref()
        .map(str::parse::<FormatFlag>)
        .transpose()?;
    Ok(UiContext::from_env(
        cli.json,
        format,
        cli.no_color,
        cli.ascii,
        cli.quiet,
    ))
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    if let Some(Commands::InitConfig(args)) = &cli.command {
        let ctx = ui_context(cli)?;
        commands::init::handle_init_config(cli, &ctx, args)?;
        return Ok(0);
    }

    let config = load_config(cli)?;
    let mut session = Session::new(cli, config)?;
    if session.interactive && session.ui.mode.is_pretty() && !session.ui.quiet {
        println!("Expense tracker. Type `help` for commands, `quit` to leave.");
    }

    session.run(std::io::stdin().lock())?;

    if cli.no_input && session.failures > 0 {
        tracing::debug!(failures = session.failures, "scripted session had failures");
        return Ok(exit_codes::SESSION_FAILED);
    }
    Ok(0)
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            let ctx = ui_context(&cli).unwrap_or_else(|_| {
                UiContext::from_env(cli.json, None, cli.no_color, cli.ascii, cli.quiet)
            });
            let (message, hint) = describe(&err);
            print_error(&ctx, &message, hint.as_deref());
            err.downcast_ref::<CliError>()
                .map(CliError::exit_code)
                .unwrap_or(1)
        }
    };
    std::process::exit(code);
}
