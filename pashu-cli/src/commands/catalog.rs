//! Catalog and identify commands - inspect the mock classifier's breeds and
//! run a single recognition outside the flow.

use colored::Colorize;
use pashu_config::AppConfig;
use pashu_recognition::{ImageInput, MockClassifier, RecognitionCatalog, RecognitionStage, Selection};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::create_spinner;
use crate::error::CliResult;

/// The bundled catalog, or one read from `path`.
pub async fn load(path: Option<&Path>) -> CliResult<RecognitionCatalog> {
    Ok(match path {
        Some(path) => RecognitionCatalog::from_path(path).await?,
        None => RecognitionCatalog::default(),
    })
}

pub async fn list(path: Option<&Path>, json: bool) -> CliResult<()> {
    let catalog = load(path).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("  {}", "Breed catalog".bright_white().bold());
    println!("  {}", "─".repeat(40).dimmed());
    for (i, entry) in catalog.entries().iter().enumerate() {
        println!(
            "  {} {:<20} {:>4}  {}",
            format!("{}.", i).dimmed(),
            entry.breed.bright_white(),
            entry.confidence.to_string().cyan(),
            entry.description.as_deref().unwrap_or("").dimmed()
        );
    }
    Ok(())
}

/// Classify one image file with the mock classifier.
pub async fn identify(config: &AppConfig, catalog: Option<&Path>, image: &Path) -> CliResult<()> {
    let image = ImageInput::from_path(image).await?;
    let selection = config.seed.map(Selection::Seeded).unwrap_or_default();
    let classifier = MockClassifier::new(load(catalog).await?)
        .with_delay(Duration::from_millis(config.recognition_latency_ms))
        .with_selection(selection);
    let stage = RecognitionStage::new(Arc::new(classifier));

    let spinner = create_spinner(&format!(
        "Analyzing {} ({} bytes)...",
        image.name().unwrap_or("image"),
        image.len()
    ));
    let outcome = stage.submit(Some(&image)).await;
    spinner.finish_and_clear();

    let result = outcome?;
    println!(
        "  {} {} {}",
        "✓".green().bold(),
        result.breed.bright_white().bold(),
        format!("({})", result.confidence).cyan()
    );
    if let Some(description) = &result.description {
        println!("    {}", description.dimmed());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_custom_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("breeds.json");
        std::fs::write(&path, r#"[{"breed": "Kankrej", "confidence": 79}]"#).unwrap();

        let catalog = load(Some(path.as_path())).await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(load(None).await.unwrap().len(), 5);
    }
}
