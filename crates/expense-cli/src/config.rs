use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use expense_core::Category;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseConfig {
    #[serde(default)]
    pub defaults: DefaultsSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsSection {
    /// Category used when `add` is given none
    #[serde(default = "default_category_name")]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// IANA timezone used to decide "today"; local time when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            category: default_category_name(),
        }
    }
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            timezone: None,
        }
    }
}

fn default_category_name() -> String {
    Category::default().as_str().to_string()
}

fn default_currency_symbol() -> String {
    "\u{20B9}".to_string()
}

impl ExpenseConfig {
    /// Parse the configured default category.
    pub fn default_category(&self) -> anyhow::Result<Category> {
        self.defaults.category.parse().map_err(|e| {
            anyhow::anyhow!("Invalid defaults.category in config: {}", e)
        })
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<ExpenseConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &ExpenseConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("expense"));
        }
    }
    Ok(home_dir()?.join(".config").join("expense"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
