//! Combined plain-text artifact.

use policyshelf_core::{Document, DocumentSet};
use tracing::debug;

/// Width of the delimiter line.
pub const DELIMITER_WIDTH: usize = 80;

/// Character repeated to form the delimiter line.
pub const DELIMITER_CHAR: char = '=';

/// Generates the aggregated text file (`all-policies.txt`).
#[derive(Debug, Default)]
pub struct AggregateGenerator;

impl AggregateGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Concatenate every document under a delimited name header.
    ///
    /// An empty set produces an empty string.
    pub fn generate(&self, documents: &DocumentSet) -> String {
        debug!(count = documents.len(), "generating aggregate text");

        let delimiter = DELIMITER_CHAR.to_string().repeat(DELIMITER_WIDTH);
        documents
            .iter()
            .map(|doc| section(&delimiter, doc))
            .collect()
    }
}

fn section(delimiter: &str, doc: &Document) -> String {
    format!("{delimiter}\n{}\n{delimiter}\n{}\n\n", doc.name, doc.content)
}
