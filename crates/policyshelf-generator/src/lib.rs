//! Policyshelf Generator Library
//!
//! Static artifact generation engine for policyshelf.
//!
//! # Modules
//!
//! - [`collector`] - Document discovery in the input directory
//! - [`aggregate`] - Combined plain-text artifact
//! - [`robots`] - robots.txt generation
//! - [`sitemap`] - XML sitemap generation
//! - [`html`] - Single-page HTML rendering
//! - [`build`] - Build orchestration and output writing

pub mod aggregate;
pub mod build;
pub mod collector;
pub mod html;
pub mod robots;
pub mod sitemap;

pub use aggregate::AggregateGenerator;
pub use build::{BuildError, BuildStats, Builder};
pub use collector::{CollectorError, DocumentCollector};
pub use html::HtmlGenerator;
pub use robots::RobotsGenerator;
pub use sitemap::SitemapGenerator;
