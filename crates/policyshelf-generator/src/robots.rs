//! Robots.txt generation.
//!
//! Generates the robots.txt file for search engine crawlers.

use policyshelf_core::Config;
use tracing::debug;

/// Robots.txt generator.
#[derive(Debug)]
pub struct RobotsGenerator {
    config: Config,
}

impl RobotsGenerator {
    /// Create a new robots generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate robots.txt: allow everything and point at the sitemap.
    #[must_use]
    pub fn generate(&self) -> String {
        debug!("generating robots.txt");

        let sitemap_url = self.config.site.url_for("sitemap.xml");
        format!("User-agent: *\nAllow: /\nSitemap: {sitemap_url}\n")
    }
}

#[cfg(test)]
mod tests {
    use policyshelf_core::SiteConfig;

    use super::*;

    #[test]
    fn test_generate_robots() {
        let config = Config {
            site: SiteConfig::resolve(Some("octo/handbook")).unwrap(),
            ..Config::default()
        };

        let robots = RobotsGenerator::new(config).generate();

        assert_eq!(
            robots,
            "User-agent: *\nAllow: /\nSitemap: https://octo.github.io/handbook/sitemap.xml\n"
        );
        assert_eq!(robots.lines().count(), 3);
    }
}
