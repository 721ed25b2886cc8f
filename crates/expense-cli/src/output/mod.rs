//! Output formatting for expenses and snapshots.
//!
//! Every formatter here only reads; none of them touches the ledger.

mod json;
mod text;

pub use json::{record_json, snapshot_json, summary_json};
pub use text::{print_snapshot, print_summary, record_items};
