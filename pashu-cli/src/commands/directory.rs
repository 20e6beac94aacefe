//! Directory command - list veterinary contacts and government schemes.

use colored::Colorize;
use pashu_core::Directory;
use pashu_i18n::{I18n, Language};

use crate::error::CliResult;

pub fn vets(i18n: &I18n, language: Language, emergency_only: bool) -> CliResult<()> {
    let t = |key: &str| i18n.t(key, language);

    println!("  {}", t("nearbyVets").bright_white().bold());
    println!("  {}\n", t("nearbyVetsDesc").dimmed());

    let vets = Directory.vets().iter().filter(|vet| !emergency_only || vet.emergency);
    for vet in vets {
        let badge = if vet.emergency {
            format!(" [{}]", t("emergency")).red().to_string()
        } else {
            String::new()
        };
        println!("  {}{}", vet.name.bright_white(), badge);
        println!("    {} · {}", vet.specialization, vet.address.dimmed());
        println!("    {}", vet.tel_uri().cyan());
    }
    Ok(())
}

pub fn schemes(i18n: &I18n, language: Language) -> CliResult<()> {
    let t = |key: &str| i18n.t(key, language);

    println!("  {}", t("governmentSchemes").bright_white().bold());
    println!("  {}\n", t("governmentSchemesDesc").dimmed());

    for scheme in Directory.schemes() {
        println!("  {}", t(&scheme.title_key()).bright_white());
        println!("    {}", t(&scheme.description_key()));
        println!("    {}: {}", t("benefits"), t(&scheme.benefits_key()));
        println!("    {}", scheme.website.cyan());
    }
    Ok(())
}
