//! Input and parsing helpers for the CLI.

mod input;
mod parsing;

pub use input::{prompt_category, prompt_text, PromptConfirmation};
pub use parsing::{parse_date, split_line};
