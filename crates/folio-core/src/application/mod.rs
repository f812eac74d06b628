//! Application layer for Folio.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! data rules itself. All invariants live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::CatalogService;

pub use ports::ProjectSource;

pub use error::ApplicationError;
