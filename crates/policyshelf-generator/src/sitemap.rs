//! Sitemap generation.
//!
//! Generates the XML sitemap listing the site root, the aggregated text file
//! and every published document.

use policyshelf_core::{Config, DocumentSet, config::AGGREGATE_FILE};
use tracing::debug;

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: Config,
}

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Public URLs in sitemap order: site root, aggregated text, then one per
    /// document in set order.
    pub fn urls(&self, documents: &DocumentSet) -> Vec<String> {
        let site = &self.config.site;
        let mut urls = Vec::with_capacity(documents.len() + 2);
        urls.push(site.url_for(""));
        urls.push(site.url_for(AGGREGATE_FILE));
        urls.extend(
            documents
                .names()
                .map(|name| format!("{}{}", site.site_base_url, site.library_path(name))),
        );
        urls
    }

    /// Generate sitemap XML.
    pub fn generate(&self, documents: &DocumentSet) -> String {
        let urls = self.urls(documents);
        debug!(count = urls.len(), "generating sitemap");

        let mut lines = Vec::with_capacity(urls.len() + 3);
        lines.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
        lines.push(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#.to_string());
        lines.extend(
            urls.iter()
                .map(|url| format!("  <url><loc>{}</loc></url>", escape_xml(url))),
        );
        lines.push("</urlset>\n".to_string());

        lines.join("\n")
    }
}

/// Escape special XML characters (`&`, `<`, `>`, `"`, `'`).
fn escape_xml(s: &str) -> String {
    html_escape::encode_quoted_attribute(s).into_owned()
}

#[cfg(test)]
mod tests {
    use policyshelf_core::{Document, SiteConfig};

    use super::*;

    fn test_config() -> Config {
        Config {
            site: SiteConfig::resolve(Some("octo/handbook")).unwrap(),
            ..Config::default()
        }
    }

    fn set(names: &[&str]) -> DocumentSet {
        names
            .iter()
            .map(|name| Document::new(*name, *name, ""))
            .collect()
    }

    #[test]
    fn test_urls_order() {
        let generator = SitemapGenerator::new(test_config());

        let urls = generator.urls(&set(&["b.txt", "A.txt"]));

        assert_eq!(
            urls,
            vec![
                "https://octo.github.io/handbook/",
                "https://octo.github.io/handbook/all-policies.txt",
                "https://octo.github.io/handbook/handbook/library/A.txt",
                "https://octo.github.io/handbook/handbook/library/b.txt",
            ]
        );
    }

    #[test]
    fn test_generate_sitemap() {
        let generator = SitemapGenerator::new(test_config());

        let xml = generator.generate(&set(&["leave.txt"]));

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset"));
        assert!(xml.contains("  <url><loc>https://octo.github.io/handbook/</loc></url>\n"));
        assert!(xml.contains("/handbook/library/leave.txt</loc></url>"));
        assert!(xml.ends_with("</urlset>\n"));
        assert_eq!(xml.matches("<url>").count(), 3);
    }

    #[test]
    fn test_empty_set_has_two_urls() {
        let xml = SitemapGenerator::new(test_config()).generate(&DocumentSet::default());
        assert_eq!(xml.matches("<url>").count(), 2);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml("\"quoted\""), "&quot;quoted&quot;");
        assert!(!escape_xml("it's").contains('\''));
    }

    #[test]
    fn test_document_names_are_escaped() {
        let xml = SitemapGenerator::new(test_config()).generate(&set(&["<a&b>.txt"]));

        assert!(xml.contains("library/&lt;a&amp;b&gt;.txt</loc>"));
        assert!(!xml.contains("<a&b>"));
    }
}
