//! File-backed project source.
//!
//! Reads a JSON or TOML catalog (see [`crate::catalog_format`]) from disk.
//! The file is read on every [`ProjectSource::load`]; callers that need a
//! stable view load once through `CatalogService`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use folio_core::{
    application::{ApplicationError, ports::ProjectSource},
    domain::{DomainError, ProjectCatalog, ProjectRecord},
    error::FolioResult,
};

use crate::catalog_format::CatalogFormat;

/// Catalog stored in a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
    format: CatalogFormat,
}

impl FileSource {
    /// Source whose format is inferred from the file extension.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let format = CatalogFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    /// Source with an explicit format, whatever the extension says.
    pub fn with_format(path: impl Into<PathBuf>, format: CatalogFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> CatalogFormat {
        self.format
    }

    /// Read the file and return its entries unchecked, in file order.
    pub fn load_records(&self) -> FolioResult<Vec<ProjectRecord>> {
        let raw = self.read()?;
        Ok(self.format.parse_records(&raw)?)
    }

    fn read(&self) -> FolioResult<String> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            ApplicationError::SourceUnavailable {
                source_name: self.path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        debug!(bytes = raw.len(), "catalog file read");
        Ok(raw)
    }
}

impl ProjectSource for FileSource {
    #[instrument(skip(self), fields(path = %self.path.display(), format = %self.format))]
    fn load(&self) -> FolioResult<ProjectCatalog> {
        let raw = self.read()?;
        let catalog = self.format.parse(&raw)?;
        info!(count = catalog.len(), "catalog file parsed");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
