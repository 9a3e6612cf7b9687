//! Configuration management commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use shoe_catalog::{Currency, RecencyWindow};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, ShoefrontConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config)?;
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.info(&format!("Loaded from {}", path.display())),
        None => ctx.output.info("No config file found, showing defaults"),
    }

    println!("[display]");
    ctx.output.kv("currency", &ctx.config.display.currency);
    ctx.output.kv("route_prefix", &ctx.config.display.route_prefix);

    println!("[recency]");
    ctx.output
        .kv("window_days", &ctx.config.recency.window_days.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("shoefront.toml");

    if config_path.exists() && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;

        if !overwrite {
            ctx.output.warn("Config init cancelled");
            return Ok(());
        }
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(&ctx.config);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Collect errors and warnings for `config`.
fn check_config(config: &ShoefrontConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if let Err(e) = config.display.currency.parse::<Currency>() {
        errors.push(format!("display.currency: {}", e));
    }

    if !config.display.route_prefix.starts_with('/') {
        errors.push("display.route_prefix must start with '/'".to_string());
    }

    if config.recency.window_days <= 0 {
        errors.push("recency.window_days must be positive".to_string());
    } else if let Err(e) = RecencyWindow::days(config.recency.window_days) {
        errors.push(format!("recency.window_days: {}", e));
    } else if config.recency.window_days > 365 {
        warnings.push(format!(
            "recency.window_days is {}; every shoe from the last year will be flagged as new",
            config.recency.window_days
        ));
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let (errors, warnings) = check_config(&ShoefrontConfig::default());
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_invalid_values() {
        let mut config = ShoefrontConfig::default();
        config.display.currency = "BTC".to_string();
        config.display.route_prefix = "shoe".to_string();
        config.recency.window_days = 0;

        let (errors, _) = check_config(&config);
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("Unknown currency: BTC"));
    }

    #[test]
    fn test_long_window_warns() {
        let mut config = ShoefrontConfig::default();
        config.recency.window_days = 400;

        let (errors, warnings) = check_config(&config);
        assert!(errors.is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_out_of_range_window_is_an_error() {
        let mut config = ShoefrontConfig::default();
        config.recency.window_days = i64::MAX;

        let (errors, warnings) = check_config(&config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Invalid recency window"));
        assert!(warnings.is_empty());
    }
}
