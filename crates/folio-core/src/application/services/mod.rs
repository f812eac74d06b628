//! Application services - orchestrate use cases.

pub mod catalog_service;

pub use catalog_service::CatalogService;
