//! Config command - show the effective settings or check a config file.

use colored::Colorize;
use pashu_config::AppConfig;
use std::path::Path;

use crate::error::CliResult;
use crate::success;

/// Print the resolved configuration as TOML (or JSON).
pub fn show(config: &AppConfig, json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", toml::to_string_pretty(config)?);
    }
    Ok(())
}

/// Load a file the way the flow would and report the outcome.
pub fn check(file: &Path) -> CliResult<()> {
    println!("  {} {}", "Checking".bright_white().bold(), file.display());

    let config = AppConfig::load(Some(file))?;

    success(&format!("{} is valid", file.display()));
    println!(
        "    {} {}, login {}ms, recognition {}ms",
        "→".cyan(),
        config.default_language.native_name(),
        config.login_latency_ms,
        config.recognition_latency_ms
    );
    Ok(())
}
