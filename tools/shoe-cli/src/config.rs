//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shoe_card::{CardOptions, DEFAULT_ROUTE_PREFIX};
use shoe_catalog::{Currency, RecencyWindow, DEFAULT_WINDOW_DAYS};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shoefront.toml", ".shoefront.toml", "shoefront.json"];

/// Shoefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoefrontConfig {
    /// Card display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// New-release window.
    #[serde(default)]
    pub recency: RecencyConfig,
}

impl ShoefrontConfig {
    /// Load config from a file, choosing JSON or TOML by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse config text.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Build renderer options, anchoring the recency window at the current time.
    pub fn card_options(&self) -> Result<CardOptions> {
        let currency: Currency = self
            .display
            .currency
            .parse()
            .context("Invalid display.currency")?;

        let recency =
            RecencyWindow::days(self.recency.window_days).context("Invalid recency.window_days")?;

        Ok(CardOptions {
            currency,
            route_prefix: self.display.route_prefix.clone(),
            recency,
        })
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("json")
}

/// Card display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency code listing prices are denominated in.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Path prefix of card links.
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

fn default_route_prefix() -> String {
    DEFAULT_ROUTE_PREFIX.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            route_prefix: default_route_prefix(),
        }
    }
}

/// New-release window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecencyConfig {
    /// Days after release during which a shoe counts as new.
    #[serde(default = "default_window_days")]
    pub window_days: i64,
}

fn default_window_days() -> i64 {
    DEFAULT_WINDOW_DAYS
}

impl Default for RecencyConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
        }
    }
}

/// Generate a default shoefront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Shoefront card configuration

[display]
currency = "{currency}"
route_prefix = "{route_prefix}"

[recency]
# Shoes released within this many days are flagged "Just Released!"
window_days = {window_days}
"#,
        currency = default_currency(),
        route_prefix = DEFAULT_ROUTE_PREFIX,
        window_days = DEFAULT_WINDOW_DAYS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ShoefrontConfig::parse("", false).unwrap();
        assert_eq!(config, ShoefrontConfig::default());
        assert_eq!(config.display.currency, "USD");
        assert_eq!(config.display.route_prefix, "/shoe");
        assert_eq!(config.recency.window_days, 30);
    }

    #[test]
    fn test_generated_config_round_trips() {
        let config = ShoefrontConfig::parse(&generate_default_config(), false).unwrap();
        assert_eq!(config, ShoefrontConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = ShoefrontConfig::parse("[recency]\nwindow_days = 14\n", false).unwrap();
        assert_eq!(config.recency.window_days, 14);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_json_config() {
        let config =
            ShoefrontConfig::parse(r#"{"display": {"currency": "eur"}}"#, true).unwrap();
        let options = config.card_options().unwrap();
        assert_eq!(options.currency, Currency::EUR);
        assert_eq!(options.route_prefix, "/shoe");
    }

    #[test]
    fn test_card_options_window() {
        let mut config = ShoefrontConfig::default();
        config.recency.window_days = 7;
        let options = config.card_options().unwrap();
        assert_eq!(options.recency.window(), RecencyWindow::days(7).unwrap().window());
    }

    #[test]
    fn test_invalid_currency() {
        let mut config = ShoefrontConfig::default();
        config.display.currency = "DOGE".to_string();
        let err = config.card_options().unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown currency: DOGE"));
    }

    #[test]
    fn test_out_of_range_window_is_an_error() {
        let config =
            ShoefrontConfig::parse("[recency]\nwindow_days = 9223372036854775807\n", false)
                .unwrap();
        let err = config.card_options().unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Invalid recency.window_days"));
        assert!(message.contains("Invalid recency window: 9223372036854775807 days"));
    }
}
