//! On-disk catalog formats.
//!
//! # JSON
//!
//! A top-level array, one object per project:
//!
//! ```json
//! [
//!   {
//!     "title": "大圍棋教室",
//!     "description": "使用 Vue.js全家桶，及Lottie動畫製作的圍棋教學網站。",
//!     "href": "https://22495521.github.io/BigGo/#/FrontPage",
//!     "imgSrc": "/static/images/go-class.png"
//!   }
//! ]
//! ```
//!
//! # TOML
//!
//! TOML has no top-level arrays, so entries live in a `projects` array of
//! tables:
//!
//! ```toml
//! [[projects]]
//! title = "大圍棋教室"
//! description = "使用 Vue.js全家桶，及Lottie動畫製作的圍棋教學網站。"
//! href = "https://22495521.github.io/BigGo/#/FrontPage"
//! imgSrc = "/static/images/go-class.png"
//! ```
//!
//! Both formats accept only `title`, `description`, `href` and `imgSrc`;
//! any other key fails the load.

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use folio_core::domain::{DomainError, ProjectCatalog, ProjectEntry, ProjectRecord};

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDocument {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

#[derive(Serialize)]
struct TomlDocumentRef<'a> {
    projects: &'a [ProjectEntry],
}

impl CatalogFormat {
    /// Pick a format from a file extension (`.json` / `.toml`, any case).
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| DomainError::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    /// Parse a catalog, preserving entry order.
    ///
    /// Syntax errors become [`DomainError::MalformedCatalog`]; an entry that
    /// parses but breaks a data rule becomes [`DomainError::InvalidEntry`]
    /// carrying its position. Loading stops at the first such entry; use
    /// [`CatalogFormat::parse_records`] to inspect every entry.
    pub fn parse(&self, input: &str) -> Result<ProjectCatalog, DomainError> {
        self.parse_records(input)?
            .into_iter()
            .enumerate()
            .map(|(index, record)| ProjectEntry::try_from(record).map_err(|e| e.at_index(index)))
            .collect()
    }

    /// Parse the document structure only, leaving each entry unchecked.
    #[instrument(skip(input), fields(format = %self, bytes = input.len()))]
    pub fn parse_records(&self, input: &str) -> Result<Vec<ProjectRecord>, DomainError> {
        let records = match self {
            Self::Json => serde_json::from_str::<Vec<ProjectRecord>>(input)
                .map_err(|e| self.malformed(e))?,
            Self::Toml => {
                toml::from_str::<TomlDocument>(input)
                    .map_err(|e| self.malformed(e))?
                    .projects
            }
        };
        debug!(count = records.len(), "parsed catalog records");
        Ok(records)
    }

    /// Serialise a catalog in this format. Absent optional fields are omitted.
    pub fn render(&self, catalog: &ProjectCatalog) -> Result<String, DomainError> {
        match self {
            Self::Json => serde_json::to_string_pretty(catalog).map_err(|e| self.malformed(e)),
            Self::Toml => toml::to_string_pretty(&TomlDocumentRef {
                projects: catalog.entries(),
            })
            .map_err(|e| self.malformed(e)),
        }
    }

    fn malformed(&self, err: impl fmt::Display) -> DomainError {
        DomainError::MalformedCatalog {
            format: self.to_string(),
            reason: err.to_string(),
        }
    }
}

impl FromStr for CatalogFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(DomainError::UnsupportedFormat(other.to_owned())),
        }
    }
}

impl fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const JSON: &str = r#"[
        { "title": "First", "description": "one", "href": "https://one.example" },
        { "title": "Second", "description": "two", "imgSrc": "/static/images/two.png" },
        { "title": "Third", "description": "three" }
    ]"#;

    const TOML: &str = r#"
        [[projects]]
        title = "First"
        description = "one"
        href = "https://one.example"

        [[projects]]
        title = "Second"
        description = "two"
        imgSrc = "/static/images/two.png"
    "#;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(
            CatalogFormat::from_path(&PathBuf::from("data/projects.json")).unwrap(),
            CatalogFormat::Json
        );
        assert_eq!(
            CatalogFormat::from_path(&PathBuf::from("projects.TOML")).unwrap(),
            CatalogFormat::Toml
        );
        assert!(CatalogFormat::from_path(&PathBuf::from("projects.yaml")).is_err());
        assert!(CatalogFormat::from_path(&PathBuf::from("projects")).is_err());
    }

    #[test]
    fn json_preserves_order_and_absence() {
        let catalog = CatalogFormat::Json.parse(JSON).unwrap();
        let titles: Vec<_> = catalog.iter().map(ProjectEntry::title).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);

        assert!(catalog[0].href().is_some() && catalog[0].img_src().is_none());
        assert!(catalog[1].href().is_none() && catalog[1].img_src().is_some());
        assert!(catalog[2].href().is_none() && catalog[2].img_src().is_none());
    }

    #[test]
    fn toml_uses_projects_tables() {
        let catalog = CatalogFormat::Toml.parse(TOML).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[1].title(), "Second");
    }

    #[test]
    fn empty_toml_document_is_an_empty_catalog() {
        assert!(CatalogFormat::Toml.parse("").unwrap().is_empty());
    }

    #[test]
    fn bad_entry_reports_its_index() {
        let input = r#"[
            { "title": "ok", "description": "fine" },
            { "description": "no title" }
        ]"#;
        let err = CatalogFormat::Json.parse(input).unwrap_err();
        assert!(matches!(err, DomainError::InvalidEntry { index: 1, .. }));
    }

    #[test]
    fn parse_records_keeps_invalid_entries() {
        let input = r#"[
            { "title": "", "description": "blank title" },
            { "title": "ok", "description": "fine" },
            { "title": "bad", "description": "link", "href": "not a url" }
        ]"#;
        let records = CatalogFormat::Json.parse_records(input).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].href.as_deref(), Some("not a url"));
    }

    #[test]
    fn unknown_fields_and_bad_syntax_are_malformed() {
        let unknown = r#"[{ "title": "t", "description": "d", "image": "x.png" }]"#;
        assert!(matches!(
            CatalogFormat::Json.parse(unknown),
            Err(DomainError::MalformedCatalog { .. })
        ));
        assert!(matches!(
            CatalogFormat::Toml.parse("[[projects]\ntitle ="),
            Err(DomainError::MalformedCatalog { .. })
        ));
    }

    #[test]
    fn rendered_output_uses_wire_names_and_omits_absent_fields() {
        let catalog = CatalogFormat::Json.parse(JSON).unwrap();

        let json = CatalogFormat::Json.render(&catalog).unwrap();
        assert!(json.contains("\"imgSrc\""));
        assert_eq!(json.matches("\"href\"").count(), 1);

        let toml = CatalogFormat::Toml.render(&catalog).unwrap();
        assert!(toml.contains("[[projects]]"));
        assert!(toml.contains("imgSrc = \"/static/images/two.png\""));
        assert_eq!(CatalogFormat::Toml.parse(&toml).unwrap(), catalog);
    }
}
