//! Resolution of config paths and row references.

use std::path::PathBuf;

use expense_core::{Clock, ExpenseLedger};
use uuid::Uuid;

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, ExpenseConfig};
use crate::constants::MIN_ID_PREFIX;
use crate::errors::CliError;

/// Where the config comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` or `EXPENSE_CONFIG`; must exist
    Explicit(PathBuf),
    /// XDG default; may be absent
    Default(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Default(path) => path,
        }
    }
}

/// Resolve the config file path from CLI args (or env) or the XDG default.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<ConfigSource> {
    if let Some(path) = cli.config.as_deref() {
        if !path.trim().is_empty() {
            return Ok(ConfigSource::Explicit(PathBuf::from(path)));
        }
    }
    Ok(ConfigSource::Default(default_config_path()?))
}

/// Load the config, falling back to defaults when no default file exists.
pub fn load_config(cli: &Cli) -> anyhow::Result<ExpenseConfig> {
    let source = resolve_config_path(cli)?;
    let path = source.path();
    if !path.exists() {
        return match source {
            ConfigSource::Explicit(_) => Err(CliError::not_found(
                format!("No config found at {}", path.display()),
                "Run `expense init-config` to create one.",
            )
            .into()),
            ConfigSource::Default(_) => Ok(ExpenseConfig::default()),
        };
    }
    let config = read_config(path)?;
    config.default_category()?;
    Ok(config)
}

/// Resolve a row reference typed by the user to an expense ID.
///
/// Accepts a 1-based row number from the current display order, a full
/// UUID, or a unique ID prefix of at least eight characters. Numbers are
/// tried as row numbers first; a number of eight or more digits that names
/// no row is then looked up as an ID prefix.
pub fn resolve_row<C: Clock>(ledger: &ExpenseLedger<C>, token: &str) -> Result<Uuid, CliError> {
    let token = token.trim();

    if let Ok(row) = token.parse::<usize>() {
        if let Some(record) = ledger.snapshot().row(row) {
            return Ok(record.id);
        }
        // All-digit tokens long enough to be an ID prefix get a second chance.
        if token.len() < MIN_ID_PREFIX {
            return Err(CliError::not_found(
                format!("No expense at row {}", row),
                "Run `list` to see row numbers.",
            ));
        }
    }

    if let Ok(id) = Uuid::parse_str(token) {
        return Ok(id);
    }

    let prefix = token.to_ascii_lowercase();
    if prefix.len() < MIN_ID_PREFIX || !prefix.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
        return Err(CliError::invalid_input_with_hint(
            format!("Invalid row reference: {}", token),
            "Use a row number from `list` or an expense ID.",
        ));
    }

    let matches: Vec<Uuid> = ledger
        .records()
        .iter()
        .map(|record| record.id)
        .filter(|id| id.to_string().starts_with(&prefix))
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(CliError::not_found(
            format!("No expense with ID starting {}", token),
            "Run `list` to see expense IDs.",
        )),
        _ => Err(CliError::invalid_input_with_hint(
            format!("ID prefix {} matches {} expenses", token, matches.len()),
            "Use more characters of the ID.",
        )),
    }
}
