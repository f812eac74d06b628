// ============================================================================
// domain/error.rs - CATALOG VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so services can hand them out by value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid href '{value}': {reason}")]
    InvalidHref { value: String, reason: String },

    #[error("Invalid image source '{value}': {reason}")]
    InvalidImageSource { value: String, reason: String },

    #[error("Project #{index} is invalid: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: Box<DomainError>,
    },

    // ========================================================================
    // Schema Errors
    // ========================================================================
    #[error("Malformed {format} catalog: {reason}")]
    MalformedCatalog { format: String, reason: String },

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

impl DomainError {
    /// Wrap an entry-level error with the position of the entry in its catalog.
    pub fn at_index(self, index: usize) -> Self {
        Self::InvalidEntry {
            index,
            source: Box::new(self),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyField { field } | Self::MissingRequiredField { field } => vec![
                format!("Every project needs a non-empty '{}'", field),
                "Required fields: title, description".into(),
            ],
            Self::InvalidHref { value, .. } => vec![
                format!("'{}' is not a usable link", value),
                "Use an absolute URL (https://example.com/...)".into(),
                "Or a site-relative path starting with '/'".into(),
                "Omit 'href' entirely for unlinked projects".into(),
            ],
            Self::InvalidImageSource { .. } => vec![
                "Use a path such as /static/images/preview.png or a full URL".into(),
                "Omit 'imgSrc' entirely for projects without a preview".into(),
            ],
            Self::InvalidEntry { index, source } => {
                let mut out = vec![format!("Fix project #{} in the catalog", index)];
                out.extend(source.suggestions());
                out
            }
            Self::MalformedCatalog { format, .. } => vec![
                format!("Check the {} syntax of the catalog file", format),
                "Allowed fields: title, description, href, imgSrc".into(),
            ],
            Self::UnsupportedFormat(_) => vec![
                "Supported catalog formats: json, toml".into(),
                "Name the file with a .json or .toml extension".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyField { .. }
            | Self::MissingRequiredField { .. }
            | Self::InvalidHref { .. }
            | Self::InvalidImageSource { .. }
            | Self::InvalidEntry { .. } => ErrorCategory::Validation,
            Self::MalformedCatalog { .. } => ErrorCategory::Schema,
            Self::UnsupportedFormat(_) => ErrorCategory::Unsupported,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Schema,
    Unsupported,
}
