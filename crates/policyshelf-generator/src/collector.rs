//! Document discovery.
//!
//! Lists the `.txt` files directly inside the input directory and loads them
//! into a [`DocumentSet`].

use std::{fs, path::PathBuf};

use policyshelf_core::{Document, DocumentSet};
use thiserror::Error;
use tracing::{debug, info};

/// Extension recognised as a text document.
pub const TEXT_EXTENSION: &str = ".txt";

/// Discovery errors. Any of these aborts the build.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// The input directory could not be created.
    #[error("cannot create input directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input directory could not be listed.
    #[error("cannot list input directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for collector operations.
pub type Result<T> = std::result::Result<T, CollectorError>;

/// Collects documents from a flat input directory.
#[derive(Debug)]
pub struct DocumentCollector {
    input_dir: PathBuf,
}

impl DocumentCollector {
    /// Create a new collector.
    #[must_use]
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    /// Collect all documents, creating the input directory if it is missing.
    ///
    /// Files that cannot be read are kept with placeholder content.
    pub fn collect(&self) -> Result<DocumentSet> {
        info!(dir = %self.input_dir.display(), "collecting documents");

        fs::create_dir_all(&self.input_dir).map_err(|source| CollectorError::CreateDir {
            path: self.input_dir.clone(),
            source,
        })?;

        let paths = self.find_document_files()?;
        let documents = DocumentSet::new(paths.iter().map(|path| Document::load(path)).collect());

        info!(
            count = documents.len(),
            unreadable = documents.unreadable().count(),
            "collected documents"
        );
        Ok(documents)
    }

    /// List candidate files in the input directory.
    fn find_document_files(&self) -> Result<Vec<PathBuf>> {
        let read_dir_err = |source| CollectorError::ReadDir {
            path: self.input_dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.input_dir).map_err(read_dir_err)? {
            let entry = entry.map_err(read_dir_err)?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();

            if !is_document_name(&name) {
                continue;
            }

            // Unresolvable entries (dangling links) stay in the set and surface
            // as read failures.
            if fs::metadata(&path).is_ok_and(|meta| meta.is_dir()) {
                debug!(path = %path.display(), "skipping directory");
                continue;
            }

            files.push(path);
        }

        Ok(files)
    }
}

/// Whether a directory entry name is a `.txt` document. Dot-files count.
fn is_document_name(name: &str) -> bool {
    name.ends_with(TEXT_EXTENSION)
}
