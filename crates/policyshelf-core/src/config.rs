//! Site configuration management.
//!
//! Two layers feed a build: [`Settings`] (title and directories, read from an
//! optional TOML file plus `POLICYSHELF_*` environment variables) and the
//! repository reference (`owner/name`) from which every public URL is derived.

use std::{
    env::{self, VarError},
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Environment variable holding `owner/repository` (set by GitHub Actions).
pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";

/// Repository used when no override is present.
pub const DEFAULT_REPOSITORY: &str = "rubz1911/mhpoly";

/// Branch served by the raw-content mirror.
pub const DEFAULT_BRANCH: &str = "main";

/// Directory segment under which documents are published.
pub const LIBRARY_DIR: &str = "library";

/// File name of the aggregated text artifact.
pub const AGGREGATE_FILE: &str = "all-policies.txt";

/// Default settings file name.
pub const DEFAULT_SETTINGS_FILE: &str = "policyshelf.toml";

/// Prefix for settings environment variables.
pub const ENV_PREFIX: &str = "POLICYSHELF";

/// A GitHub repository reference (`owner/name`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    /// Account or organisation owning the repository.
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl FromStr for RepositoryRef {
    type Err = CoreError;

    /// Split on the first `/`. Both segments must be non-empty and the name
    /// may not contain another `/`.
    fn from_str(s: &str) -> Result<Self> {
        let Some((owner, name)) = s.split_once('/') else {
            return Err(CoreError::config(format!(
                "invalid repository {s:?}: expected \"owner/repository\""
            )));
        };

        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(CoreError::config(format!(
                "invalid repository {s:?}: expected exactly two non-empty segments"
            )));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl Default for RepositoryRef {
    fn default() -> Self {
        Self {
            owner: "rubz1911".to_string(),
            name: "mhpoly".to_string(),
        }
    }
}

/// Public URL layout of the site. Every field is derived from the owner and
/// repository name alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub owner: String,
    pub repository_name: String,

    /// Path prefix of the site on the Pages host (e.g. `/mhpoly`).
    pub base_path: String,

    /// Site root without trailing slash (e.g. `https://rubz1911.github.io/mhpoly`).
    pub site_base_url: String,

    /// Raw-content mirror of the default branch.
    pub raw_content_base_url: String,
}

impl SiteConfig {
    /// Derive the URL layout for a repository.
    #[must_use]
    pub fn new(repository: &RepositoryRef) -> Self {
        let RepositoryRef { owner, name } = repository;
        Self {
            owner: owner.clone(),
            repository_name: name.clone(),
            base_path: format!("/{name}"),
            site_base_url: format!("https://{owner}.github.io/{name}"),
            raw_content_base_url: format!(
                "https://raw.githubusercontent.com/{owner}/{name}/{DEFAULT_BRANCH}"
            ),
        }
    }

    /// Resolve from an optional `owner/repository` override.
    ///
    /// A missing or blank override selects [`DEFAULT_REPOSITORY`]. A malformed
    /// one is an error; there is no silent fallback.
    pub fn resolve(repository: Option<&str>) -> Result<Self> {
        let repository = match repository.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => value.parse()?,
            None => RepositoryRef::default(),
        };
        Ok(Self::new(&repository))
    }

    /// Absolute site URL for a path relative to the site root.
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.site_base_url)
    }

    /// Host-relative path of a published document (`/repo/library/name`).
    pub fn library_path(&self, name: &str) -> String {
        format!("{}/{LIBRARY_DIR}/{name}", self.base_path)
    }

    /// Host-relative path of a file at the site root.
    pub fn site_path(&self, path: &str) -> String {
        format!("{}/{}", self.base_path, path.trim_start_matches('/'))
    }

    /// Raw-content URL for a path relative to the repository root.
    pub fn raw_url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.raw_content_base_url,
            path.trim_start_matches('/')
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(&RepositoryRef::default())
    }
}

/// Resolved configuration passed into every generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL layout.
    pub site: SiteConfig,

    /// Page title shown in `<title>` and the page header.
    pub title: String,
}

impl Config {
    /// Resolve configuration, reading [`REPOSITORY_ENV`] from the process
    /// environment.
    pub fn from_env(settings: &Settings, cli_repository: Option<&str>) -> Result<Self> {
        let env_repository = match env::var(REPOSITORY_ENV) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(e @ VarError::NotUnicode(_)) => {
                return Err(CoreError::config_with_source(
                    format!("{REPOSITORY_ENV} is not valid unicode"),
                    e,
                ));
            }
        };

        Self::resolve(settings, cli_repository, env_repository.as_deref())
    }

    /// Resolve configuration from explicit sources.
    ///
    /// The repository comes from the first non-blank of: CLI flag,
    /// environment value, settings file, built-in default.
    pub fn resolve(
        settings: &Settings,
        cli_repository: Option<&str>,
        env_repository: Option<&str>,
    ) -> Result<Self> {
        let repository = [
            cli_repository,
            env_repository,
            settings.site.repository.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty());

        let site = SiteConfig::resolve(repository)?;
        tracing::debug!(
            owner = %site.owner,
            repository = %site.repository_name,
            "resolved site configuration"
        );

        Ok(Self {
            site,
            title: settings.site.title.clone(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            title: default_title(),
        }
    }
}

/// Settings read from the optional settings file and environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Site-wide settings.
    pub site: SiteSettings,

    /// Build settings.
    pub build: BuildSettings,
}

/// Site section of the settings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Page title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Fallback `owner/repository` used when neither the CLI nor
    /// `GITHUB_REPOSITORY` provides one.
    #[serde(default)]
    pub repository: Option<String>,
}

/// Build section of the settings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Directory scanned for `.txt` documents.
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory receiving the generated artifacts.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_title() -> String {
    "MH Poly — Policy Library (Static)".to_string()
}

fn default_input_dir() -> PathBuf {
    PathBuf::from(LIBRARY_DIR)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            repository: None,
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl Settings {
    /// Load settings from `path` (which may be absent) layered with
    /// `POLICYSHELF_*` environment variables, e.g. `POLICYSHELF_BUILD__INPUT_DIR`.
    pub fn load(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings.
    fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.build.input_dir.as_os_str().is_empty() {
            return Err(CoreError::config("build.input_dir cannot be empty"));
        }

        Ok(())
    }
}
