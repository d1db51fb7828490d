//! Single-page HTML rendering.
//!
//! Produces one self-contained `index.html` that links every document and
//! inlines its full text. No scripts; the stylesheet is embedded.

use policyshelf_core::{
    Config, Document, DocumentSet,
    config::{AGGREGATE_FILE, LIBRARY_DIR},
};
use tracing::debug;

/// Embedded stylesheet.
const STYLE: &str = r#"
:root{--pad:16px;--radius:16px;--shadow:0 8px 20px rgba(0,0,0,0.08);--muted:#666;}
*{box-sizing:border-box;font-family:system-ui,-apple-system,Segoe UI,Roboto,Ubuntu,Cantarell,Noto Sans,"Helvetica Neue",Arial;}
body{margin:0;background:#f7f7fb;color:#222;line-height:1.55;padding:24px;max-width:1000px;margin-inline:auto;}
header{margin-bottom:20px;}
h1{margin:0 0 6px 0;font-size:1.6rem;}
.note{color:var(--muted);font-size:0.95rem;margin-top:4px}
.doc{background:#fff;border-radius:var(--radius);box-shadow:var(--shadow);padding:var(--pad);margin:18px 0;}
.doc h2{margin:0 0 8px 0;font-size:1.15rem}
.doc .meta{color:var(--muted);font-size:0.9rem;margin-bottom:8px}
.doc pre{white-space:pre-wrap;margin:0;overflow-wrap:anywhere}
.btn{border:1px solid #ddd;background:#fafafa;border-radius:12px;padding:6px 10px;text-decoration:none;color:#222}
.btn:hover{background:#f0f0f5}
code{background:#f0f0f5;padding:2px 6px;border-radius:6px}
nav ul{padding-left:20px;margin:8px 0}
nav li{margin:4px 0}
"#;

/// HTML page generator.
#[derive(Debug)]
pub struct HtmlGenerator {
    config: Config,
}

impl HtmlGenerator {
    /// Create a new HTML generator with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render the complete page.
    pub fn generate(&self, documents: &DocumentSet) -> String {
        debug!(count = documents.len(), "generating index.html");

        let mut html = self.head();
        html.push_str(&self.header(documents));
        html.push_str("  <div id=\"docs\">\n");

        if documents.is_empty() {
            html.push_str(&empty_article());
        } else {
            for doc in documents {
                html.push_str(&self.article(doc));
            }
        }

        html.push_str("  </div>\n</body>\n</html>\n");
        html
    }

    fn head(&self) -> String {
        let title = escape(&self.config.title);
        let canonical = escape(&self.config.site.url_for(""));

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
  <title>{title}</title>
  <meta name="robots" content="index, follow">
  <link rel="canonical" href="{canonical}" />
  <style>{STYLE}</style>
</head>
"#
        )
    }

    /// Page header with the navigation list.
    fn header(&self, documents: &DocumentSet) -> String {
        let site = &self.config.site;
        let title = escape(&self.config.title);

        let mut nav = String::new();
        for name in documents.names() {
            nav.push_str(&format!(
                "        <li><a href=\"{}\">{}</a> — <a href=\"{}\" rel=\"nofollow\">raw</a></li>\n",
                escape(&site.library_path(name)),
                escape(name),
                escape(&site.raw_url_for(&library_file(name))),
            ));
        }
        nav.push_str(&format!(
            "        <li><a href=\"{}\">{AGGREGATE_FILE}</a> — <a href=\"{}\" rel=\"nofollow\">raw</a></li>\n",
            escape(&site.site_path(AGGREGATE_FILE)),
            escape(&site.raw_url_for(AGGREGATE_FILE)),
        ));

        format!(
            r#"<body>
  <header>
    <h1>{title}</h1>
    <div class="note">
      This page is statically generated on each push. All policy text is inlined below for crawler access.
    </div>
    <nav>
      <p><strong>Direct links (crawler-friendly):</strong></p>
      <ul>
{nav}      </ul>
    </nav>
  </header>
"#
        )
    }

    /// One article inlining a document.
    fn article(&self, doc: &Document) -> String {
        let site = &self.config.site;
        let name = escape(&doc.name);
        let path = escape(&site.library_path(&doc.name));
        let raw = escape(&site.raw_url_for(&library_file(&doc.name)));
        let content = html_escape::encode_text(&doc.content);

        format!(
            concat!(
                r#"<article class="doc"><h2>{name}</h2>"#,
                r#"<div class="meta"><a class="btn" href="{path}" download>Download</a> "#,
                r#"<span class="note">Source: <code>{path}</code></span>"#,
                r#" — <a href="{raw}">Open raw (text/plain)</a></div>"#,
                r#"<pre>{content}</pre></article>"#,
                "\n"
            ),
            name = name,
            path = path,
            raw = raw,
            content = content,
        )
    }
}

/// Placeholder shown when there are no documents.
fn empty_article() -> String {
    format!(
        "<article class=\"doc\"><h2>No .txt files found</h2><pre>Place UTF-8 .txt files into /{LIBRARY_DIR}/</pre></article>\n"
    )
}

/// Repository-relative path of a document.
fn library_file(name: &str) -> String {
    format!("{LIBRARY_DIR}/{name}")
}

/// Escape text for element content or a quoted attribute.
fn escape(s: &str) -> String {
    html_escape::encode_quoted_attribute(s).into_owned()
}
