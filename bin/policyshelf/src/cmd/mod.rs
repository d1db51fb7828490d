//! Command implementations.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use policyshelf_core::{Config, Settings};

pub mod build;
pub mod check;

/// Load settings and resolve the site configuration.
///
/// `repository` (from `--repository`) takes precedence over
/// `GITHUB_REPOSITORY` and the settings file.
pub(crate) fn load_config(settings_path: &Path, repository: Option<&str>) -> Result<(Settings, Config)> {
    let settings = Settings::load(settings_path)
        .wrap_err_with(|| format!("Failed to load settings from {}", settings_path.display()))?;

    let config = Config::from_env(&settings, repository).wrap_err("Invalid repository configuration")?;
    tracing::debug!(?settings, ?config, "Loaded configuration");

    Ok((settings, config))
}
