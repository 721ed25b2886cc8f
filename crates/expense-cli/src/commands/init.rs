//! `init-config` command handler.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, FuzzySelect, Input, Select};

use expense_core::Category;

use crate::app::resolve_config_path;
use crate::cli::{Cli, InitConfigArgs};
use crate::config::{write_config, ExpenseConfig};
use crate::errors::CliError;
use crate::ui::theme::{styled, styles};
use crate::ui::{print, receipt, Badge, UiContext};

/// Print a step indicator for the wizard flow.
fn print_step(ctx: &UiContext, step: usize, total: usize, title: &str) {
    if !ctx.mode.is_pretty() {
        return;
    }
    let progress = styled(&format!("{}/{}", step, total), styles::dim(), ctx.color);
    println!("{}  {}", progress, styled(title, styles::bold(), ctx.color));
}

fn parse_timezone(value: &str) -> anyhow::Result<Option<String>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    let tz = trimmed
        .parse::<chrono_tz::Tz>()
        .map_err(|_| anyhow::anyhow!("Invalid timezone: {}", trimmed))?;
    Ok(Some(tz.to_string()))
}

fn timezone_options() -> Vec<String> {
    let mut zones: Vec<String> = chrono_tz::TZ_VARIANTS
        .iter()
        .map(|tz| tz.to_string())
        .collect();
    zones.retain(|tz| tz != "UTC");
    zones.sort();
    zones.insert(0, "UTC".to_string());
    zones.insert(0, "Auto (system)".to_string());
    zones
}

fn run_wizard(ctx: &UiContext, config: &mut ExpenseConfig) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();

    print_step(ctx, 1, 3, "Currency symbol");
    config.ui.currency_symbol = Input::<String>::with_theme(&theme)
        .with_prompt("Currency symbol")
        .default(config.ui.currency_symbol.clone())
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read currency symbol: {}", e))?;

    print_step(ctx, 2, 3, "Default category");
    let names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
    let index = Select::with_theme(&theme)
        .with_prompt("Category used when `add` gets none")
        .items(&names)
        .default(0)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read category: {}", e))?;
    config.defaults.category = names[index].to_string();

    print_step(ctx, 3, 3, "Timezone");
    let zones = timezone_options();
    let index = FuzzySelect::with_theme(&theme)
        .with_prompt("Timezone for expense dates")
        .items(&zones)
        .default(0)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read timezone: {}", e))?;
    config.ui.timezone = if index == 0 {
        None
    } else {
        parse_timezone(&zones[index])?
    };
    Ok(())
}

pub fn handle_init_config(cli: &Cli, ctx: &UiContext, args: &InitConfigArgs) -> anyhow::Result<()> {
    let source = resolve_config_path(cli)?;
    let path = source.path();
    if path.exists() && !args.force {
        return Err(CliError::refused(
            format!("Config already exists at {}", path.display()),
            "Pass --force to overwrite it.",
        )
        .into());
    }

    let mut config = ExpenseConfig::default();
    let interactive = std::io::stdin().is_terminal() && !cli.no_input && !ctx.mode.is_json();
    if interactive {
        run_wizard(ctx, &mut config)?;
    }
    write_config(path, &config)?;
    tracing::debug!(path = %path.display(), "config written");

    if ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "action": "init-config",
                "path": path.display().to_string(),
                "config": config,
            })
        );
    } else if !ctx.quiet {
        let mut items = vec![
            ("Path", path.display().to_string()),
            ("Default category", config.defaults.category.clone()),
            ("Currency symbol", config.ui.currency_symbol.clone()),
        ];
        if let Some(tz) = &config.ui.timezone {
            items.push(("Timezone", tz.clone()));
        }
        print(ctx, &receipt(ctx, Badge::Ok, "Config written", &items));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("auto").unwrap(), None);
        assert_eq!(parse_timezone("  ").unwrap(), None);
        assert_eq!(
            parse_timezone("Asia/Kolkata").unwrap().as_deref(),
            Some("Asia/Kolkata")
        );
        assert!(parse_timezone("Nowhere/Special").is_err());
    }

    #[test]
    fn test_timezone_options_start_with_auto_and_utc() {
        let zones = timezone_options();
        assert_eq!(zones[0], "Auto (system)");
        assert_eq!(zones[1], "UTC");
        assert!(zones.iter().any(|tz| tz == "Asia/Kolkata"));
    }
}
