//! Documents and the ordered document set.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::error::CoreError;

/// Decode bytes as UTF-8, replacing invalid sequences with U+FFFD.
///
/// Never fails.
#[must_use]
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// One input text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Base name including extension.
    pub name: String,

    /// Location on disk.
    pub path: PathBuf,

    /// Decoded content, or a diagnostic placeholder if the file was unreadable.
    pub content: String,

    /// Set when `content` is a placeholder.
    pub read_error: Option<String>,
}

impl Document {
    /// Create a document from already decoded content.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            content: content.into(),
            read_error: None,
        }
    }

    /// Read a document from disk.
    ///
    /// A failed read does not propagate: the content becomes
    /// `(Error reading {name}: {error})` and the error is kept in
    /// [`Document::read_error`].
    pub fn load(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match fs::read(path) {
            Ok(bytes) => Self::new(name, path, decode_lossy(&bytes)),
            Err(source) => {
                let err = CoreError::document_read(&name, path, source);
                warn!(path = %path.display(), error = %err, "failed to read document");
                let message = err.to_string();
                Self {
                    name,
                    path: path.to_path_buf(),
                    content: format!("({message})"),
                    read_error: Some(message),
                }
            }
        }
    }

    /// Whether the content is a read-failure placeholder.
    #[must_use]
    pub fn is_unreadable(&self) -> bool {
        self.read_error.is_some()
    }
}

/// Documents ordered case-insensitively by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSet {
    documents: Vec<Document>,
}

impl DocumentSet {
    /// Sort documents by lower-cased name. Names that differ only in case
    /// fall back to byte order of the exact name.
    #[must_use]
    pub fn new(mut documents: Vec<Document>) -> Self {
        documents.sort_by_cached_key(|doc| (doc.name.to_lowercase(), doc.name.clone()));
        Self { documents }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document names in set order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|doc| doc.name.as_str())
    }

    /// Documents whose content is a read-failure placeholder.
    pub fn unreadable(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().filter(|doc| doc.is_unreadable())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Document] {
        &self.documents
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

impl FromIterator<Document> for DocumentSet {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
