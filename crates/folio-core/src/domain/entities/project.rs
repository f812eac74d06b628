//! The `ProjectEntry` aggregate: one portfolio item.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::{
    DomainError,
    value_objects::{Href, ImageSource},
};

// ============================================================================
// ProjectEntry
// ============================================================================

/// One portfolio item.
///
/// `title` and `description` are always present and non-empty once validated.
/// `href` and `img_src` are `None` when the project has no link or no preview
/// image; absence is never encoded as an empty string.
///
/// ## Wire shape
///
/// ```json
/// { "title": "...", "description": "...", "href": "...", "imgSrc": "..." }
/// ```
///
/// Absent optional fields are omitted on serialisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct ProjectEntry {
    title: Cow<'static, str>,
    description: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<Href>,
    #[serde(rename = "imgSrc", skip_serializing_if = "Option::is_none")]
    img_src: Option<ImageSource>,
}

impl ProjectEntry {
    pub fn builder() -> ProjectEntryBuilder {
        ProjectEntryBuilder::default()
    }

    /// Declare an entry from compile-time literals.
    ///
    /// No validation happens here; call [`ProjectEntry::validate`] (the
    /// built-in catalog does so in its tests).
    pub const fn from_static(
        title: &'static str,
        description: &'static str,
        href: Option<&'static str>,
        img_src: Option<&'static str>,
    ) -> Self {
        Self {
            title: Cow::Borrowed(title),
            description: Cow::Borrowed(description),
            href: match href {
                Some(h) => Some(Href::from_static(h)),
                None => None,
            },
            img_src: match img_src {
                Some(s) => Some(ImageSource::from_static(s)),
                None => None,
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn href(&self) -> Option<&Href> {
        self.href.as_ref()
    }

    pub fn img_src(&self) -> Option<&ImageSource> {
        self.img_src.as_ref()
    }

    pub fn is_linked(&self) -> bool {
        self.href.is_some()
    }

    pub fn has_image(&self) -> bool {
        self.img_src.is_some()
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "title" });
        }
        if self.description.trim().is_empty() {
            return Err(DomainError::EmptyField {
                field: "description",
            });
        }
        if let Some(href) = &self.href {
            href.validate()?;
        }
        if let Some(img) = &self.img_src {
            img.validate()?;
        }
        Ok(())
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for constructing entries from runtime data.
///
/// `build()` enforces:
/// - `title` and `description` set and non-empty
/// - `href` parses as an absolute URL or a `/`-rooted path
/// - `img_src` non-empty
#[derive(Debug, Default)]
pub struct ProjectEntryBuilder {
    title: Option<Cow<'static, str>>,
    description: Option<Cow<'static, str>>,
    href: Option<Cow<'static, str>>,
    img_src: Option<Cow<'static, str>>,
}

impl ProjectEntryBuilder {
    pub fn title(mut self, title: impl Into<Cow<'static, str>>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn href(mut self, href: impl Into<Cow<'static, str>>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn img_src(mut self, img_src: impl Into<Cow<'static, str>>) -> Self {
        self.img_src = Some(img_src.into());
        self
    }

    pub fn build(self) -> Result<ProjectEntry, DomainError> {
        let entry = ProjectEntry {
            title: self
                .title
                .ok_or(DomainError::MissingRequiredField { field: "title" })?,
            description: self
                .description
                .ok_or(DomainError::MissingRequiredField {
                    field: "description",
                })?,
            href: self.href.map(Href::try_new).transpose()?,
            img_src: self.img_src.map(ImageSource::try_new).transpose()?,
        };

        entry.validate()?;
        Ok(entry)
    }
}

// ============================================================================
// Persistence DTO
// ============================================================================

/// Raw, unvalidated shape of an entry as it appears in a catalog file.
///
/// Deserialisation of [`ProjectEntry`] goes through this type so that a
/// missing `title` surfaces as [`DomainError::MissingRequiredField`] rather
/// than a bare parser message.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub href: Option<String>,
    #[serde(rename = "imgSrc")]
    pub img_src: Option<String>,
}

impl TryFrom<ProjectRecord> for ProjectEntry {
    type Error = DomainError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let mut builder = ProjectEntry::builder();
        if let Some(title) = record.title {
            builder = builder.title(title);
        }
        if let Some(description) = record.description {
            builder = builder.description(description);
        }
        if let Some(href) = record.href {
            builder = builder.href(href);
        }
        if let Some(img_src) = record.img_src {
            builder = builder.img_src(img_src);
        }
        builder.build()
    }
}
