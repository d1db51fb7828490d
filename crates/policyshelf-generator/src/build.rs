//! Build orchestration.
//!
//! Runs discovery once, renders the four artifacts from the resulting
//! document set, and writes each one atomically into the output directory.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Instant,
};

use policyshelf_core::{Config, DocumentSet, config::AGGREGATE_FILE};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    aggregate::AggregateGenerator,
    collector::{CollectorError, DocumentCollector},
    html::HtmlGenerator,
    robots::RobotsGenerator,
    sitemap::SitemapGenerator,
};

/// File name of the robots policy.
pub const ROBOTS_FILE: &str = "robots.txt";

/// File name of the sitemap.
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// File name of the rendered page.
pub const INDEX_FILE: &str = "index.html";

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Discovery failed.
    #[error("collector error: {0}")]
    Collector(#[from] CollectorError),

    /// An artifact could not be written.
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of documents discovered.
    pub documents: usize,

    /// Documents rendered with placeholder content.
    pub unreadable: usize,

    /// Paths of the artifacts written, in write order.
    pub artifacts: Vec<PathBuf>,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Rendered artifact contents, keyed by output file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub aggregate: String,
    pub robots: String,
    pub sitemap: String,
    pub index: String,
}

impl Artifacts {
    /// Render every artifact from the configuration and document set.
    ///
    /// The document-dependent renderers share nothing, so they run as a
    /// fork-join; the result does not depend on scheduling.
    #[must_use]
    pub fn render(config: &Config, documents: &DocumentSet) -> Self {
        let robots = RobotsGenerator::new(config.clone()).generate();

        let (aggregate, (sitemap, index)) = rayon::join(
            || AggregateGenerator::new().generate(documents),
            || {
                rayon::join(
                    || SitemapGenerator::new(config.clone()).generate(documents),
                    || HtmlGenerator::new(config.clone()).generate(documents),
                )
            },
        );

        Self {
            aggregate,
            robots,
            sitemap,
            index,
        }
    }

    /// `(file name, contents)` pairs in write order.
    pub fn files(&self) -> [(&'static str, &str); 4] {
        [
            (AGGREGATE_FILE, self.aggregate.as_str()),
            (ROBOTS_FILE, self.robots.as_str()),
            (SITEMAP_FILE, self.sitemap.as_str()),
            (INDEX_FILE, self.index.as_str()),
        ]
    }
}

/// Site builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: Config, input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Discover documents without rendering or writing anything.
    pub fn collect(&self) -> Result<DocumentSet> {
        Ok(DocumentCollector::new(&self.input_dir).collect()?)
    }

    /// Execute the full build process.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();

        info!(
            input = %self.input_dir.display(),
            output = %self.output_dir.display(),
            "starting build"
        );

        // 1. Discovery; failure here aborts before any output exists.
        let documents = self.collect()?;

        // 2. Render
        let artifacts = Artifacts::render(&self.config, &documents);

        // 3. Write
        fs::create_dir_all(&self.output_dir).map_err(|source| BuildError::Write {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut stats = BuildStats {
            documents: documents.len(),
            unreadable: documents.unreadable().count(),
            ..BuildStats::default()
        };

        for (name, contents) in artifacts.files() {
            let path = self.output_dir.join(name);
            write_atomic(&path, contents)?;
            debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
            stats.artifacts.push(path);
        }

        if stats.unreadable > 0 {
            warn!(
                unreadable = stats.unreadable,
                "some documents were rendered with placeholder content"
            );
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            documents = stats.documents,
            unreadable = stats.unreadable,
            artifacts = stats.artifacts.len(),
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }
}

/// Write a file so readers see either the old contents or the new ones,
/// never a partial write.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;

    // Temp files are created owner-only; published artifacts must be world-readable.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }

    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use policyshelf_core::SiteConfig;
    use tempfile::TempDir;

    use super::*;

    fn test_config() -> Config {
        Config {
            site: SiteConfig::resolve(Some("octo/handbook")).unwrap(),
            title: "Test Library".to_string(),
        }
    }

    #[test]
    fn test_build_empty_site() {
        let root = TempDir::new().unwrap();
        let input = root.path().join("library");
        let output = root.path().join("public");

        let stats = Builder::new(test_config(), &input, &output).build().unwrap();

        assert_eq!(stats.documents, 0);
        assert_eq!(stats.artifacts.len(), 4);
        assert!(input.is_dir());
        for name in [AGGREGATE_FILE, ROBOTS_FILE, SITEMAP_FILE, INDEX_FILE] {
            assert!(output.join(name).exists(), "{name} should exist");
        }
        assert_eq!(fs::read_to_string(output.join(AGGREGATE_FILE)).unwrap(), "");
    }

    #[test]
    fn test_build_with_content() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("leave.txt"), "Annual leave is 25 days.").unwrap();

        let stats = Builder::new(test_config(), input.path(), output.path())
            .build()
            .unwrap();

        assert_eq!(stats.documents, 1);
        assert_eq!(stats.unreadable, 0);
        let index = fs::read_to_string(output.path().join(INDEX_FILE)).unwrap();
        assert!(index.contains("<pre>Annual leave is 25 days.</pre>"));
    }

    #[test]
    fn test_build_overwrites_previous_outputs() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(output.path().join(ROBOTS_FILE), "stale").unwrap();

        Builder::new(test_config(), input.path(), output.path())
            .build()
            .unwrap();

        let robots = fs::read_to_string(output.path().join(ROBOTS_FILE)).unwrap();
        assert!(robots.starts_with("User-agent: *\n"));
    }

    #[test]
    fn test_discovery_failure_writes_nothing() {
        let root = TempDir::new().unwrap();
        let input = root.path().join("library");
        let output = root.path().join("public");
        fs::write(&input, "a file, not a directory").unwrap();

        let result = Builder::new(test_config(), &input, &output).build();

        assert!(matches!(result, Err(BuildError::Collector(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output_fails() {
        let root = TempDir::new().unwrap();
        let output = root.path().join("public");
        fs::write(&output, "a file, not a directory").unwrap();

        let result = Builder::new(test_config(), root.path().join("library"), &output).build();

        assert!(matches!(result, Err(BuildError::Write { .. })));
    }

    #[test]
    fn test_render_is_deterministic() {
        let documents: DocumentSet = ["b.txt", "a.txt"]
            .into_iter()
            .map(|name| policyshelf_core::Document::new(name, name, "body"))
            .collect();

        let first = Artifacts::render(&test_config(), &documents);
        let second = Artifacts::render(&test_config(), &documents);

        assert_eq!(first, second);
    }

    #[test]
    fn test_build_stats() {
        let stats = BuildStats::default();
        assert_eq!(stats.documents, 0);
        assert_eq!(stats.duration_ms, 0);
        assert!(stats.artifacts.is_empty());
    }
}
