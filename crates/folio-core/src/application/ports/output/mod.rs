//! Driven (output) ports - implemented by infrastructure.
//!
//! The `folio-adapters` crate provides implementations.

use crate::domain::ProjectCatalog;
use crate::error::FolioResult;

/// Port for obtaining a project catalog.
///
/// Implemented by:
/// - `folio_adapters::BuiltinSource` (the compiled-in catalog)
/// - `folio_adapters::FileSource` (JSON / TOML catalog files)
/// - `folio_adapters::InMemorySource` (programmatic catalogs, tests)
///
/// Implementations return entries in declared order and must not reorder,
/// filter or deduplicate them.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectSource: Send + Sync {
    /// Load the full catalog.
    fn load(&self) -> FolioResult<ProjectCatalog>;

    /// Human-readable origin, e.g. `built-in` or a file path.
    fn describe(&self) -> String;
}
