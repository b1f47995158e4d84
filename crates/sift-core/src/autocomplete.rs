//! Autocomplete requests and suggestion projection.

use std::collections::HashSet;

use crate::{package::PackageRow, query::fold_case, window::Window};

/// Parameters of a routed autocomplete call.
///
/// A non-empty `id` selects version suggestions for that package; otherwise
/// `query` is used to suggest package ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutocompleteRequest {
    pub query: Option<String>,
    pub id: Option<String>,
    /// Accepted for compatibility; does not influence matching.
    pub supported_framework: Option<String>,
    pub window: Window,
    pub prerelease: bool,
}

impl AutocompleteRequest {
    pub fn by_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn with_window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    pub fn with_prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }

    pub fn with_supported_framework(mut self, framework: impl Into<String>) -> Self {
        self.supported_framework = Some(framework.into());
        self
    }

    /// Resolves which lookup this request performs.
    pub fn mode(&self) -> AutocompleteMode<'_> {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => AutocompleteMode::ById(id),
            _ => AutocompleteMode::ByQuery(self.query.as_deref().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocompleteMode<'a> {
    ByQuery(&'a str),
    ById(&'a str),
}

/// Projects windowed rows to package ids, dropping later case-insensitive duplicates.
pub fn distinct_ids(rows: Vec<PackageRow>) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert(fold_case(&row.id)))
        .map(|row| row.id)
        .collect()
}

/// Projects windowed rows to their raw version strings, dropping later duplicates.
pub fn distinct_versions(rows: Vec<PackageRow>) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .map(|row| row.version_string)
        .filter(|version| seen.insert(version.clone()))
        .collect()
}
