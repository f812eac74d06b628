//! Application layer errors.
//!
//! These errors represent failures in orchestration, not data rules.
//! Data-rule violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while obtaining or querying a catalog.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A catalog source could not be read.
    #[error("Catalog source '{source_name}' unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// Index lookup beyond the end of the catalog.
    #[error("No project at index {index} (catalog has {len} entries)")]
    ProjectNotFound { index: usize, len: usize },

    /// Title lookup found nothing.
    #[error("No project titled '{title}'")]
    NoMatchingProject { title: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceUnavailable { source_name, .. } => vec![
                format!("Failed to read: {}", source_name),
                "Check that the file exists and is readable".into(),
                "Omit --file to use the built-in catalog".into(),
            ],
            Self::ProjectNotFound { len, .. } => vec![
                format!("Valid indices are 0..{}", len),
                "Try: folio list to see every project".into(),
            ],
            Self::NoMatchingProject { .. } => vec![
                "Titles are matched case-insensitively".into(),
                "Try: folio list to see every project".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceUnavailable { .. } => ErrorCategory::Io,
            Self::ProjectNotFound { .. } | Self::NoMatchingProject { .. } => {
                ErrorCategory::NotFound
            }
        }
    }
}
