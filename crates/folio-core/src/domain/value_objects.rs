//! Value objects for the optional parts of a project entry.
//!
//! Both types wrap a `Cow<'static, str>` so that the built-in catalog can be
//! declared as a `static` literal while file-loaded entries own their text.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use super::DomainError;

/// Base used to resolve site-relative links during validation only.
const RELATIVE_BASE: &str = "https://localhost/";

// ============================================================================
// Href
// ============================================================================

/// Link target of a project.
///
/// Either an absolute URL (`https://...`, `mailto:...`) or a site-relative
/// path beginning with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Href(Cow<'static, str>);

impl Href {
    /// Fallible constructor; the only way to build an `Href` from runtime data.
    pub fn try_new(value: impl Into<Cow<'static, str>>) -> Result<Self, DomainError> {
        let value = value.into();
        Self::check(&value)?;
        Ok(Self(value))
    }

    /// Wrap a compile-time literal without validation.
    ///
    /// Used by the built-in catalog; its entries are validated by tests.
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` for site-relative links such as `/blog/post`.
    pub fn is_internal(&self) -> bool {
        self.0.starts_with('/') && !self.0.starts_with("//")
    }

    /// `true` for absolute `http`/`https` links.
    pub fn is_external(&self) -> bool {
        Url::parse(&self.0)
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false)
    }

    /// Re-run validation, e.g. on a literal built with [`Href::from_static`].
    pub fn validate(&self) -> Result<(), DomainError> {
        Self::check(&self.0)
    }

    fn check(value: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidHref {
            value: value.to_owned(),
            reason: reason.to_owned(),
        };

        if value.trim().is_empty() {
            return Err(invalid("link is empty"));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(invalid("link contains whitespace"));
        }

        let parsed = if value.starts_with('/') {
            Url::parse(RELATIVE_BASE).and_then(|base| base.join(value))
        } else {
            Url::parse(value)
        };

        parsed.map(|_| ()).map_err(|e| invalid(&e.to_string()))
    }
}

impl TryFrom<String> for Href {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<&str> for Href {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value.to_owned())
    }
}

impl From<Href> for String {
    fn from(href: Href) -> Self {
        href.0.into_owned()
    }
}

impl AsRef<str> for Href {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// ImageSource
// ============================================================================

/// Path or URL of a project's preview image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageSource(Cow<'static, str>);

impl ImageSource {
    pub fn try_new(value: impl Into<Cow<'static, str>>) -> Result<Self, DomainError> {
        let value = value.into();
        Self::check(&value)?;
        Ok(Self(value))
    }

    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when the image is referenced by an absolute URL rather than a path.
    pub fn is_remote(&self) -> bool {
        Url::parse(&self.0)
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        Self::check(&self.0)
    }

    fn check(value: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidImageSource {
            value: value.to_owned(),
            reason: reason.to_owned(),
        };

        if value.trim().is_empty() {
            return Err(invalid("image source is empty"));
        }
        if value.chars().any(char::is_control) {
            return Err(invalid("image source contains control characters"));
        }
        Ok(())
    }
}

impl TryFrom<String> for ImageSource {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<&str> for ImageSource {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value.to_owned())
    }
}

impl From<ImageSource> for String {
    fn from(src: ImageSource) -> Self {
        src.0.into_owned()
    }
}

impl AsRef<str> for ImageSource {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
