//! Locales command - audit and inspect the translation tables.

use colored::Colorize;
use pashu_i18n::{I18n, Language};
use std::path::Path;

use crate::error::{CliError, CliResult};

/// Build the resolver, overlaying `dir` when given.
pub fn load(dir: Option<&Path>) -> CliResult<I18n> {
    let i18n = I18n::builtin();
    Ok(match dir {
        Some(dir) => i18n.load_from_dir(dir)?,
        None => i18n,
    })
}

/// Keys missing from each language, in `Language::ALL` order.
pub fn gaps(i18n: &I18n) -> Vec<(Language, Vec<String>)> {
    Language::ALL
        .into_iter()
        .map(|language| (language, i18n.missing_keys(language)))
        .collect()
}

/// Report every key some table has and another lacks.
pub fn check(dir: Option<&Path>) -> CliResult<()> {
    let i18n = load(dir)?;
    let gaps = gaps(&i18n);

    println!("  {}", "Locale tables".bright_white().bold());
    println!("  {}", "─".repeat(40).dimmed());

    for (language, missing) in &gaps {
        if missing.is_empty() {
            println!("  {} {} ({})", "✓".green(), language.native_name(), language.code());
        } else {
            println!(
                "  {} {} ({}): {} missing",
                "✗".red(),
                language.native_name(),
                language.code(),
                missing.len()
            );
            for key in missing {
                println!("      {}", key.yellow());
            }
        }
    }

    let total: usize = gaps.iter().map(|(_, missing)| missing.len()).sum();
    if total == 0 {
        Ok(())
    } else {
        Err(CliError::Validation(format!("{} missing translation(s)", total)))
    }
}

/// Print one key in every language.
pub fn show(dir: Option<&Path>, key: &str) -> CliResult<()> {
    let i18n = load(dir)?;

    for language in Language::ALL {
        let text = i18n.t(key, language);
        let marker = if i18n.has(key, language) {
            "✓".green()
        } else {
            "○".yellow()
        };
        println!("  {} {}: {}", marker, language.code().dimmed(), text);
    }
    Ok(())
}
