//! Infrastructure adapters for Folio.
//!
//! This crate implements the ports defined in `folio-core::application::ports`.
//! It holds the built-in catalog literal and every file I/O path.

pub mod builtin_projects;
pub mod catalog_format;
pub mod project_source;

// Re-export commonly used adapters
pub use builtin_projects::{BuiltinSource, projects};
pub use catalog_format::CatalogFormat;
pub use project_source::{FileSource, InMemorySource};
