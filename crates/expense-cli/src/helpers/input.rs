//! Interactive prompts.

use dialoguer::{Confirm, Input, Select};

use expense_core::{Category, Confirmation, ExpenseRecord};

use crate::ui::{format_amount, format_date};

/// Prompt for a line of text, optionally prefilled.
pub fn prompt_text(label: &str, initial: Option<&str>) -> anyhow::Result<String> {
    let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
    if let Some(value) = initial {
        input = input.with_initial_text(value);
    }
    input
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label.to_lowercase(), e))
}

/// Prompt for a category from the fixed list.
pub fn prompt_category(selected: Category) -> anyhow::Result<String> {
    let names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
    let default_index = Category::ALL
        .iter()
        .position(|category| *category == selected)
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt("Category")
        .items(&names)
        .default(default_index)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read category: {}", e))?;
    Ok(names[index].to_string())
}

/// Asks on the terminal before a delete.
pub struct PromptConfirmation<'a> {
    pub currency: &'a str,
}

impl Confirmation for PromptConfirmation<'_> {
    fn confirm(&mut self, record: &ExpenseRecord) -> bool {
        let message = format!(
            "Are you sure you want to delete this expense?\n  Amount: {}\n  Description: {}\n  Category: {}\n  Date: {}\n",
            format_amount(record.amount, self.currency),
            record.description,
            record.category,
            format_date(&record.date, true)
        );
        // A failed prompt (closed terminal, Ctrl-C) counts as "no".
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
