//! Application-level plumbing for the Expense CLI.
//!
//! This module provides:
//! - The interactive session that owns the ledger
//! - Config path and row reference resolution
//! - A timezone-aware clock

mod clock;
mod context;
mod resolver;

pub use clock::ZonedClock;
pub use context::{Flow, Session};
pub use resolver::{load_config, resolve_config_path, resolve_row, ConfigSource};
