/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When AppConfig schema changes
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::path::PathBuf;

use intern_tracker_client::AppConfig;
use intern_tracker_client::config::{ApiConfig, LogConfig, UserConfig};

pub fn run_init(output: PathBuf) -> Result<()> {
    println!("{}", style("Welcome to Intern Tracker Init").bold().cyan());
    println!(
        "{}",
        style("This will guide you through creating a new client configuration.").dim()
    );

    let theme = ColorfulTheme::default();
    let defaults = AppConfig::default();

    println!("\n{}", style("--- Backend ---").bold());
    let base_url: String = Input::with_theme(&theme)
        .with_prompt("Backend URL")
        .default(defaults.api.base_url.clone())
        .interact_text()?;

    let timeout_secs: u64 = Input::with_theme(&theme)
        .with_prompt("Request timeout (seconds)")
        .default(defaults.api.timeout_secs)
        .interact_text()?;

    println!("\n{}", style("--- User ---").bold());
    let user_id: String = Input::with_theme(&theme)
        .with_prompt("Default user ID (leave empty to type it each time)")
        .allow_empty(true)
        .interact_text()?;

    println!("\n{}", style("--- Logging ---").bold());
    let levels = ["info", "debug", "warn", "error"];
    let level = Select::with_theme(&theme)
        .with_prompt("Log level")
        .items(&levels)
        .default(0)
        .interact()?;

    let config = AppConfig {
        api: ApiConfig {
            base_url,
            timeout_secs,
            ..defaults.api
        },
        user: UserConfig {
            default_user_id: Some(user_id.trim().to_string()).filter(|id| !id.is_empty()),
        },
        log: LogConfig {
            level: levels[level].to_string(),
            directory: None,
        },
    };
    config.validate()?;

    let yaml = config.to_yaml()?;
    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&output, yaml)
        .with_context(|| format!("failed to write config to {}", output.display()))?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!("Configuration written to: {}", style(output.display()).cyan());

    Ok(())
}
