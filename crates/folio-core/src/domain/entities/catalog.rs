//! The ordered, immutable collection of project entries.

use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::project::ProjectEntry;
use crate::domain::DomainError;

/// Ordered sequence of [`ProjectEntry`] values, in display order.
///
/// Backed by an `Arc<[ProjectEntry]>`: cloning shares the same storage and
/// there is no mutation path once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectCatalog {
    entries: Arc<[ProjectEntry]>,
}

impl ProjectCatalog {
    pub fn new(entries: impl Into<Arc<[ProjectEntry]>>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// All entries in declared order.
    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ProjectEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectEntry> {
        self.entries.iter()
    }

    /// Validate every entry, reporting the first failure with its index.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (index, entry) in self.entries.iter().enumerate() {
            entry.validate().map_err(|e| e.at_index(index))?;
        }
        Ok(())
    }

    /// Titles that occur more than once, in order of first appearance.
    ///
    /// Duplicates are allowed; callers may surface them as warnings.
    pub fn duplicate_titles(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for entry in self.entries.iter() {
            *counts.entry(entry.title()).or_default() += 1;
        }

        let mut seen = Vec::new();
        for entry in self.entries.iter() {
            let title = entry.title();
            if counts[title] > 1 && !seen.contains(&title) {
                seen.push(title);
            }
        }
        seen
    }
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for ProjectCatalog {
    type Target = [ProjectEntry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl From<Vec<ProjectEntry>> for ProjectCatalog {
    fn from(entries: Vec<ProjectEntry>) -> Self {
        Self::new(entries)
    }
}

impl From<&[ProjectEntry]> for ProjectCatalog {
    fn from(entries: &[ProjectEntry]) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<ProjectEntry> for ProjectCatalog {
    fn from_iter<I: IntoIterator<Item = ProjectEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a ProjectCatalog {
    type Item = &'a ProjectEntry;
    type IntoIter = std::slice::Iter<'a, ProjectEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
