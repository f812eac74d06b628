//! Catalog Service - read-only access to a loaded project catalog.
//!
//! The catalog is loaded and validated once, in [`CatalogService::from_source`].
//! Every query afterwards is infallible apart from lookups that miss, and
//! every call observes the same entries in the same order.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::ProjectSource},
    domain::{DomainValidator, ProjectCatalog, ProjectEntry},
    error::FolioResult,
};

/// Service for catalog queries.
#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog: ProjectCatalog,
    origin: String,
}

impl CatalogService {
    /// Load a catalog from `source` and validate it.
    #[instrument(skip_all, fields(source = %source.describe()))]
    pub fn from_source(source: &dyn ProjectSource) -> FolioResult<Self> {
        let catalog = source.load()?;
        debug!(count = catalog.len(), "catalog loaded");

        DomainValidator::validate_catalog(&catalog)?;

        for title in catalog.duplicate_titles() {
            warn!(title, "duplicate project title");
        }

        info!(count = catalog.len(), "catalog ready");
        Ok(Self {
            catalog,
            origin: source.describe(),
        })
    }

    /// Wrap an already-validated catalog.
    pub fn new(catalog: ProjectCatalog, origin: impl Into<String>) -> Self {
        Self {
            catalog,
            origin: origin.into(),
        }
    }

    /// The full catalog, in declared order, unfiltered.
    pub fn projects(&self) -> &[ProjectEntry] {
        self.catalog.entries()
    }

    /// Shared handle to the underlying catalog.
    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Entry at a 0-based position.
    pub fn get(&self, index: usize) -> FolioResult<&ProjectEntry> {
        self.catalog.get(index).ok_or_else(|| {
            ApplicationError::ProjectNotFound {
                index,
                len: self.catalog.len(),
            }
            .into()
        })
    }

    /// Every entry whose title equals `title`, ignoring case, in catalog order.
    pub fn find_by_title(&self, title: &str) -> FolioResult<Vec<&ProjectEntry>> {
        let needle = title.trim().to_lowercase();
        let matches: Vec<_> = self
            .catalog
            .iter()
            .filter(|e| e.title().to_lowercase() == needle)
            .collect();

        if matches.is_empty() {
            return Err(ApplicationError::NoMatchingProject {
                title: title.to_owned(),
            }
            .into());
        }
        Ok(matches)
    }

    /// Entries that carry an `href`.
    pub fn linked(&self) -> impl Iterator<Item = &ProjectEntry> {
        self.catalog.iter().filter(|e| e.is_linked())
    }

    /// Entries that carry an `imgSrc`.
    pub fn with_images(&self) -> impl Iterator<Item = &ProjectEntry> {
        self.catalog.iter().filter(|e| e.has_image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockProjectSource;
    use crate::domain::DomainError;
    use crate::error::FolioError;

    fn sample() -> ProjectCatalog {
        ProjectCatalog::from(vec![
            ProjectEntry::from_static("Alpha", "first", Some("https://a.example"), None),
            ProjectEntry::from_static("Beta", "second", None, Some("/b.png")),
            ProjectEntry::from_static("alpha", "third", None, None),
        ])
    }

    fn mock_returning(catalog: ProjectCatalog) -> MockProjectSource {
        let mut source = MockProjectSource::new();
        source
            .expect_load()
            .times(1)
            .returning(move || Ok(catalog.clone()));
        source.expect_describe().return_const("mock".to_string());
        source
    }

    #[test]
    fn loads_exactly_once_and_keeps_order() {
        let source = mock_returning(sample());
        let service = CatalogService::from_source(&source).unwrap();

        let first: Vec<_> = service.projects().iter().map(ProjectEntry::title).collect();
        let second: Vec<_> = service.projects().iter().map(ProjectEntry::title).collect();
        assert_eq!(first, ["Alpha", "Beta", "alpha"]);
        assert_eq!(first, second);
        assert_eq!(service.origin(), "mock");
    }

    #[test]
    fn rejects_invalid_catalog() {
        let source = mock_returning(ProjectCatalog::from(vec![ProjectEntry::from_static(
            "t", "  ", None, None,
        )]));

        let err = CatalogService::from_source(&source).unwrap_err();
        assert!(matches!(
            err,
            FolioError::Domain(DomainError::InvalidEntry { index: 0, .. })
        ));
    }

    #[test]
    fn propagates_source_failure() {
        let mut source = MockProjectSource::new();
        source.expect_load().returning(|| {
            Err(ApplicationError::SourceUnavailable {
                source_name: "x.json".into(),
                reason: "gone".into(),
            }
            .into())
        });
        source.expect_describe().return_const("x.json".to_string());

        assert!(CatalogService::from_source(&source).is_err());
    }

    #[test]
    fn get_out_of_range_is_not_found() {
        let service = CatalogService::new(sample(), "test");
        assert_eq!(service.get(1).unwrap().title(), "Beta");
        assert!(matches!(
            service.get(3),
            Err(FolioError::Application(ApplicationError::ProjectNotFound {
                index: 3,
                len: 3
            }))
        ));
    }

    #[test]
    fn find_by_title_is_case_insensitive_and_ordered() {
        let service = CatalogService::new(sample(), "test");
        let found = service.find_by_title("ALPHA").unwrap();
        let descriptions: Vec<_> = found.iter().map(|e| e.description()).collect();
        assert_eq!(descriptions, ["first", "third"]);
        assert!(service.find_by_title("gamma").is_err());
    }

    #[test]
    fn linked_and_image_filters() {
        let service = CatalogService::new(sample(), "test");
        assert_eq!(service.linked().count(), 1);
        assert_eq!(service.with_images().count(), 1);
    }
}
