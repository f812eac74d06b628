//! In-memory project source.

use folio_core::{application::ports::ProjectSource, domain::ProjectCatalog, error::FolioResult};

/// Source that hands out a catalog it already holds.
///
/// Cloning the catalog only bumps a reference count.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    catalog: ProjectCatalog,
    label: String,
}

impl InMemorySource {
    pub fn new(catalog: impl Into<ProjectCatalog>) -> Self {
        Self {
            catalog: catalog.into(),
            label: "in-memory".into(),
        }
    }

    /// Override the label returned by [`ProjectSource::describe`].
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

impl ProjectSource for InMemorySource {
    fn load(&self) -> FolioResult<ProjectCatalog> {
        Ok(self.catalog.clone())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
