pub mod catalog;
pub mod project;

pub use crate::domain::DomainError;
pub use catalog::ProjectCatalog;
pub use project::{ProjectEntry, ProjectEntryBuilder, ProjectRecord};
