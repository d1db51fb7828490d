//! Build command - generates the four site artifacts

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use color_eyre::eyre::{Result, WrapErr};
use policyshelf_generator::{BuildStats, Builder};

use super::load_config;

/// Command-line overrides for a build.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Input directory, overriding `build.input_dir`.
    pub input: Option<PathBuf>,

    /// Output directory, overriding `build.output_dir`.
    pub output: Option<PathBuf>,

    /// `owner/repository`, overriding `GITHUB_REPOSITORY`.
    pub repository: Option<String>,
}

/// Run the build command.
pub fn run(settings_path: &Path, options: &BuildOptions) -> Result<BuildStats> {
    let start = Instant::now();
    tracing::info!(?settings_path, ?options, "Starting build");

    let (settings, config) = load_config(settings_path, options.repository.as_deref())?;

    let input = options.input.as_ref().unwrap_or(&settings.build.input_dir);
    let output = options.output.as_ref().unwrap_or(&settings.build.output_dir);

    let stats = Builder::new(config, input, output)
        .build()
        .wrap_err("Build failed")?;

    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Documents:  {}", stats.documents);
    if stats.unreadable > 0 {
        println!("  Unreadable: {} (placeholder content)", stats.unreadable);
    }
    let written: Vec<_> = stats
        .artifacts
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy())
        .collect();
    println!("  Wrote:      {}", written.join(", "));
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", output.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(stats)
}
