//! Policyshelf Core Library
//!
//! Core types, configuration, and error handling for the policyshelf site generator.

pub mod config;
pub mod document;
pub mod error;

pub use config::{Config, RepositoryRef, Settings, SiteConfig};
pub use document::{Document, DocumentSet};
pub use error::{CoreError, Result};
