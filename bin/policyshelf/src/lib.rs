//! Policyshelf CLI Library
//!
//! Command implementations for the policyshelf binary, which turns a folder of
//! plain-text policies into `index.html`, `all-policies.txt`, `sitemap.xml`
//! and `robots.txt`.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, check)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use policyshelf::cmd;
//!
//! // Build with settings from policyshelf.toml and GITHUB_REPOSITORY
//! cmd::build::run(Path::new("policyshelf.toml"), &cmd::build::BuildOptions::default()).unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use policyshelf_core::{Config, Settings, SiteConfig};
pub use policyshelf_generator::{BuildStats, Builder, DocumentCollector};

/// Initialize tracing with the specified verbosity level.
///
/// Logs go to stderr so stdout carries only the command summary.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
