//! UI primitives for the Expense CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges, symbols and color styles
//! - **Render**: Tables, headers, receipts, hints, errors
//! - **Format**: String utilities (amounts, dates, truncation)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::{FormatFlag, OutputMode};
pub use theme::Badge;

pub use render::{
    badge, blank_line, header, hint, kv, print, print_error, receipt, table, Column,
};

pub use format::{format_amount, format_date, plain_amount, short_id, single_line, truncate};
