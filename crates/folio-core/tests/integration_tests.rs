//! Integration tests for folio-core.

use std::sync::Arc;
use std::thread;

use folio_core::{
    application::ApplicationError,
    domain::{DomainError, ProjectRecord},
    prelude::*,
};

/// Minimal source defined outside the crate, the way an adapter would be.
struct FixedSource(ProjectCatalog);

impl ProjectSource for FixedSource {
    fn load(&self) -> FolioResult<ProjectCatalog> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "fixed".into()
    }
}

struct BrokenSource;

impl ProjectSource for BrokenSource {
    fn load(&self) -> FolioResult<ProjectCatalog> {
        Err(ApplicationError::SourceUnavailable {
            source_name: "broken".into(),
            reason: "unreachable".into(),
        }
        .into())
    }

    fn describe(&self) -> String {
        "broken".into()
    }
}

fn go_class() -> ProjectEntry {
    ProjectEntry::builder()
        .title("大圍棋教室")
        .description("使用 Vue.js全家桶，及Lottie動畫製作的圍棋教學網站。")
        .img_src("/static/images/go-class.png")
        .href("https://22495521.github.io/BigGo/#/FrontPage")
        .build()
        .unwrap()
}

#[test]
fn single_entry_catalog_is_returned_verbatim() {
    let source = FixedSource(ProjectCatalog::from(vec![go_class()]));
    let service = CatalogService::from_source(&source).unwrap();

    assert_eq!(service.projects().len(), 1);
    assert_eq!(service.projects()[0], go_class());

    let entry = &service.projects()[0];
    assert_eq!(entry.title(), "大圍棋教室");
    assert_eq!(
        entry.href().map(Href::as_str),
        Some("https://22495521.github.io/BigGo/#/FrontPage")
    );
    assert_eq!(
        entry.img_src().map(ImageSource::as_str),
        Some("/static/images/go-class.png")
    );
}

#[test]
fn repeated_reads_are_deep_equal() {
    let source = FixedSource(ProjectCatalog::from(vec![
        go_class(),
        ProjectEntry::builder()
            .title("Second")
            .description("Plain entry")
            .build()
            .unwrap(),
    ]));
    let service = CatalogService::from_source(&source).unwrap();

    let first = service.projects().to_vec();
    let second = service.projects().to_vec();
    assert_eq!(first, second);
    assert_eq!(first[1].title(), "Second");
}

#[test]
fn required_only_entry_keeps_optionals_absent() {
    let record = ProjectRecord {
        title: Some("Minimal".into()),
        description: Some("Just the basics".into()),
        href: None,
        img_src: None,
    };
    let entry = ProjectEntry::try_from(record).unwrap();
    let service = CatalogService::new(ProjectCatalog::from(vec![entry]), "inline");

    let only = service.get(0).unwrap();
    assert_eq!(only.href(), None);
    assert_eq!(only.img_src(), None);
}

#[test]
fn empty_string_href_is_not_treated_as_absent() {
    let err = ProjectEntry::builder()
        .title("t")
        .description("d")
        .href("")
        .build()
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidHref { .. }));
}

#[test]
fn source_errors_surface_with_suggestions() {
    let err = CatalogService::from_source(&BrokenSource).unwrap_err();
    assert!(err.suggestions().iter().any(|s| s.contains("broken")));
}

#[test]
fn concurrent_readers_see_the_same_catalog() {
    let service = Arc::new(CatalogService::new(
        ProjectCatalog::from(vec![go_class(), go_class()]),
        "shared",
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || service.projects().to_vec())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), service.projects());
    }
}
