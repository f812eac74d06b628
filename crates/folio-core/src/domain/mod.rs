// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Folio.
//!
//! This module contains the shape and invariants of the project catalog.
//! All loading and formatting concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Static-friendly**: entries can be declared as `static` literals
//!
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{ProjectCatalog, ProjectEntry, ProjectEntryBuilder, ProjectRecord};
pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
pub use value_objects::{Href, ImageSource};

#[cfg(test)]
mod tests {
    use super::*;

    const GO_CLASS: ProjectEntry = ProjectEntry::from_static(
        "大圍棋教室",
        "使用 Vue.js全家桶，及Lottie動畫製作的圍棋教學網站。",
        Some("https://22495521.github.io/BigGo/#/FrontPage"),
        Some("/static/images/go-class.png"),
    );

    #[test]
    fn const_entry_passes_validation() {
        assert!(DomainValidator::validate_entry(&GO_CLASS).is_ok());
    }

    #[test]
    fn const_entry_exposes_all_four_fields() {
        assert_eq!(GO_CLASS.title(), "大圍棋教室");
        assert_eq!(
            GO_CLASS.description(),
            "使用 Vue.js全家桶，及Lottie動畫製作的圍棋教學網站。"
        );
        assert_eq!(
            GO_CLASS.href().map(Href::as_str),
            Some("https://22495521.github.io/BigGo/#/FrontPage")
        );
        assert_eq!(
            GO_CLASS.img_src().map(ImageSource::as_str),
            Some("/static/images/go-class.png")
        );
    }

    #[test]
    fn catalog_validation_goes_through_validator() {
        let catalog = ProjectCatalog::from(vec![GO_CLASS]);
        assert!(DomainValidator::validate_catalog(&catalog).is_ok());

        let broken = ProjectCatalog::from(vec![ProjectEntry::from_static(
            "t",
            "d",
            Some("no scheme here"),
            None,
        )]);
        let err = DomainValidator::validate_catalog(&broken).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("href")));
    }

    #[test]
    fn record_round_trips_into_entry() {
        let record = ProjectRecord {
            title: Some("t".into()),
            description: Some("d".into()),
            href: None,
            img_src: Some("/img.png".into()),
        };
        let entry = ProjectEntry::try_from(record).unwrap();
        assert!(entry.href().is_none());
        assert_eq!(entry.img_src().map(ImageSource::as_str), Some("/img.png"));
    }
}
