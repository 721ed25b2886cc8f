//! Form validation.
//!
//! Turns raw [`ExpenseInput`] strings into typed values. The same rules
//! apply to adding a record and to saving an edit.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::types::{Category, ExpenseInput};

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedExpense {
    pub amount: Decimal,
    pub description: String,
    pub category: Category,
}

/// Parse an amount, requiring a number strictly greater than zero.
pub fn parse_amount(value: &str) -> Result<Decimal, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    let amount = Decimal::from_str(trimmed)
        .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    Ok(amount)
}

/// Trim a description, rejecting blank text.
pub fn parse_description(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(trimmed.to_string())
}

/// Parse a category name; blank selects the default.
pub fn parse_category(value: &str) -> Result<Category, ValidationError> {
    if value.trim().is_empty() {
        return Ok(Category::default());
    }
    value.parse()
}

impl ExpenseInput {
    /// Validate every field.
    ///
    /// Blank amount or description is reported before anything else, then
    /// the amount value, then the category.
    pub fn validate(&self) -> Result<ValidatedExpense, ValidationError> {
        if self.amount.trim().is_empty() || self.description.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        let amount = parse_amount(&self.amount)?;
        let description = parse_description(&self.description)?;
        let category = parse_category(&self.category)?;
        Ok(ValidatedExpense {
            amount,
            description,
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_decimal() {
        assert_eq!(parse_amount(" 25.50 "), Ok(Decimal::new(2550, 2)));
    }

    #[test]
    fn test_parse_amount_rejects_zero_and_negative() {
        assert_eq!(
            parse_amount("0"),
            Err(ValidationError::NonPositiveAmount(Decimal::ZERO))
        );
        assert_eq!(
            parse_amount("-4"),
            Err(ValidationError::NonPositiveAmount(Decimal::new(-4, 0)))
        );
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(
            parse_amount("12abc"),
            Err(ValidationError::InvalidAmount("12abc".to_string()))
        );
    }

    #[test]
    fn test_parse_amount_blank_is_missing() {
        assert_eq!(parse_amount("   "), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_parse_description_trims() {
        assert_eq!(parse_description("  Snack \n"), Ok("Snack".to_string()));
        assert_eq!(parse_description("\t"), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_parse_category_blank_uses_default() {
        assert_eq!(parse_category(""), Ok(Category::Fuel));
        assert_eq!(parse_category("food"), Ok(Category::Food));
    }

    #[test]
    fn test_validate_reports_missing_before_bad_amount() {
        let input = ExpenseInput::new("abc", "");
        assert_eq!(input.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_validate_checks_category_last() {
        let input = ExpenseInput::new("-1", "Lunch").with_category("nope");
        assert_eq!(
            input.validate(),
            Err(ValidationError::NonPositiveAmount(Decimal::new(-1, 0)))
        );

        let input = ExpenseInput::new("1", "Lunch").with_category("nope");
        assert_eq!(
            input.validate(),
            Err(ValidationError::UnknownCategory("nope".to_string()))
        );
    }

    #[test]
    fn test_validate_success() {
        let input = ExpenseInput::new("10", " Snack ").with_category("Food");
        let valid = input.validate().unwrap();
        assert_eq!(valid.amount, Decimal::new(10, 0));
        assert_eq!(valid.description, "Snack");
        assert_eq!(valid.category, Category::Food);
    }
}
