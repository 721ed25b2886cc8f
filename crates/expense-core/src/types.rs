//! Core data types for the expense ledger.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Fixed set of expense categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Fuel,
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Health,
    Other,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 8] = [
        Category::Fuel,
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Health,
        Category::Other,
    ];

    /// Lowercase name used in forms and output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fuel => "fuel",
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Shopping => "shopping",
            Category::Entertainment => "entertainment",
            Category::Bills => "bills",
            Category::Health => "health",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownCategory(wanted.to_string()))
    }
}

/// One expense entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique, time-ordered identifier
    pub id: Uuid,

    /// Positive amount
    pub amount: Decimal,

    /// Trimmed, non-empty description
    pub description: String,

    pub category: Category,

    /// Calendar date of the expense
    pub date: NaiveDate,
}

/// Raw form values as typed by the user.
///
/// Nothing is validated until the form reaches the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseInput {
    pub amount: String,
    pub description: String,
    /// Empty selects the default category
    pub category: String,
}

impl ExpenseInput {
    pub fn new(amount: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            description: description.into(),
            category: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

impl From<&ExpenseRecord> for ExpenseInput {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            amount: record.amount.to_string(),
            description: record.description.clone(),
            category: record.category.as_str().to_string(),
        }
    }
}

/// Reference to a record held by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRef {
    /// Zero-based insertion position
    Position(usize),
    Id(Uuid),
}

impl From<usize> for RecordRef {
    fn from(position: usize) -> Self {
        RecordRef::Position(position)
    }
}

impl From<Uuid> for RecordRef {
    fn from(id: Uuid) -> Self {
        RecordRef::Id(id)
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordRef::Position(position) => write!(f, "position {}", position),
            RecordRef::Id(id) => write!(f, "id {}", id),
        }
    }
}

/// Before and after values of a saved edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditOutcome {
    pub previous: ExpenseRecord,
    pub updated: ExpenseRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("Food".parse::<Category>(), Ok(Category::Food));
        assert_eq!("  BILLS ".parse::<Category>(), Ok(Category::Bills));
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        assert_eq!(
            "groceries".parse::<Category>(),
            Err(ValidationError::UnknownCategory("groceries".to_string()))
        );
    }

    #[test]
    fn test_category_default_is_fuel() {
        assert_eq!(Category::default(), Category::Fuel);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"entertainment\"");
    }

    #[test]
    fn test_input_from_record_prefills_form() {
        let record = ExpenseRecord {
            id: Uuid::now_v7(),
            amount: Decimal::new(2550, 2),
            description: "Fuel".to_string(),
            category: Category::Fuel,
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        };

        let input = ExpenseInput::from(&record);
        assert_eq!(input.amount, "25.50");
        assert_eq!(input.description, "Fuel");
        assert_eq!(input.category, "fuel");
    }

    #[test]
    fn test_record_ref_conversions() {
        let id = Uuid::now_v7();
        assert_eq!(RecordRef::from(2), RecordRef::Position(2));
        assert_eq!(RecordRef::from(id), RecordRef::Id(id));
    }
}
