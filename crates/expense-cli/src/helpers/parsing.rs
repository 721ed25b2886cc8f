//! Parsing helpers for session lines and dates.

use chrono::NaiveDate;

use crate::errors::CliError;

/// Split a session line into arguments.
///
/// Whitespace separates arguments. Single quotes keep text literally;
/// double quotes allow `\"` and `\\` escapes; outside quotes a backslash
/// escapes the next character.
pub fn split_line(line: &str) -> anyhow::Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_arg = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => current.push(ch),
                        None => return Err(anyhow::anyhow!("Unterminated single quote")),
                    }
                }
            }
            '"' => {
                in_arg = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch @ ('"' | '\\')) => current.push(ch),
                            Some(ch) => {
                                current.push('\\');
                                current.push(ch);
                            }
                            None => return Err(anyhow::anyhow!("Unterminated double quote")),
                        },
                        Some(ch) => current.push(ch),
                        None => return Err(anyhow::anyhow!("Unterminated double quote")),
                    }
                }
            }
            '\\' => {
                in_arg = true;
                if let Some(ch) = chars.next() {
                    current.push(ch);
                }
            }
            c if c.is_whitespace() => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            c => {
                in_arg = true;
                current.push(c);
            }
        }
    }
    if in_arg {
        args.push(current);
    }
    Ok(args)
}

/// Parse a calendar date (YYYY-MM-DD).
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| {
            CliError::invalid_input(format!("Invalid date (expected YYYY-MM-DD): {}", value)).into()
        })
}
