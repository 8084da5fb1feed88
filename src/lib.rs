//! # DOI Harvest
//!
//! Resolves local paper filenames to Semantic Scholar identifiers, fetches
//! canonical metadata (title plus DOI or other external identifiers) for each
//! resolved paper, and exports the results as a semicolon-delimited index.
//!
//! ## Architecture
//!
//! The library is a linear pipeline of four stages:
//!
//! - [`scan`]: enumerate candidate titles from a directory of paper files
//! - [`sources`]: Semantic Scholar client (title resolution + metadata fetch)
//! - [`export`]: semicolon-delimited output writing
//! - [`pipeline`]: sequential driver composing the stages
//!
//! Supporting modules:
//!
//! - [`models`]: core data structures ([`PaperRecord`], [`ExternalId`])
//! - [`config`]: configuration management

pub mod config;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod scan;
pub mod sources;

// Re-export commonly used types
pub use models::{ExternalId, PaperRecord};
pub use sources::{SemanticScholarClient, SourceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
