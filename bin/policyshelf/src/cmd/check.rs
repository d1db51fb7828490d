//! Check command - validate configuration and documents without writing output

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr, bail};
use policyshelf_generator::DocumentCollector;

use super::load_config;

/// Run the check command.
///
/// Resolves the configuration and runs discovery. Unreadable documents are
/// reported; with `strict` they fail the check.
pub fn run(
    settings_path: &Path,
    input: Option<&PathBuf>,
    repository: Option<&str>,
    strict: bool,
) -> Result<()> {
    tracing::info!(?settings_path, ?repository, strict, "Checking configuration and documents");

    println!("Checking configuration...");
    let (settings, config) = load_config(settings_path, repository)?;
    println!("  ✓ Repository: {}/{}", config.site.owner, config.site.repository_name);
    println!("  ✓ Site URL:   {}", config.site.url_for(""));

    let input = input.unwrap_or(&settings.build.input_dir);
    println!("\nChecking documents in {}...", input.display());
    let documents = DocumentCollector::new(input)
        .collect()
        .wrap_err("Document discovery failed")?;

    if documents.is_empty() {
        println!("  ⚠ No .txt files found");
    }

    for doc in &documents {
        match &doc.read_error {
            None => println!("  ✓ {}", doc.name),
            Some(error) => println!("  ✗ {}: {error}", doc.name),
        }
    }

    let unreadable = documents.unreadable().count();
    println!("\n{} document(s), {unreadable} unreadable", documents.len());

    if strict && unreadable > 0 {
        bail!("{unreadable} document(s) could not be read");
    }

    Ok(())
}
