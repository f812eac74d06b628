//! Folio Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Folio
//! portfolio project catalog, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            folio-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (CatalogService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │           (Driven: ProjectSource)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     folio-adapters (Infrastructure)     │
//! │ (BuiltinSource, FileSource, InMemory..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Data)        │
//! │  (ProjectEntry, ProjectCatalog, Href)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_core::prelude::*;
//!
//! let service = CatalogService::from_source(&source)?;
//! for project in service.projects() {
//!     println!("{}", project.title());
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{CatalogService, ports::ProjectSource};
    pub use crate::domain::{
        Href, ImageSource, ProjectCatalog, ProjectEntry, ProjectEntryBuilder,
    };
    pub use crate::error::{FolioError, FolioResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
