use crate::domain::{
    entities::{ProjectCatalog, ProjectEntry},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives on the entities; this is the one place callers
/// outside the domain go through.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_entry(entry: &ProjectEntry) -> Result<(), DomainError> {
        entry.validate()
    }

    pub fn validate_catalog(catalog: &ProjectCatalog) -> Result<(), DomainError> {
        catalog.validate()
    }
}
