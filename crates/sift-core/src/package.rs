//! Catalog rows and the search results built from them.

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    query::fold_case,
    version::PackageVersion,
};

/// One published version of a package, as stored in the catalog.
///
/// `(id, version_string)` is unique within a catalog. Ids compare
/// case-insensitively; see [`PackageRow::folded_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PackageRecord", into = "PackageRecord")]
pub struct PackageRow {
    pub id: String,
    pub version_string: String,
    pub version: PackageVersion,
    pub downloads: u64,
    pub listed: bool,
    pub title: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
    pub icon_url: Option<String>,
    pub license_url: Option<String>,
    pub project_url: Option<String>,
}

impl PackageRow {
    /// Creates a listed row with no downloads and no display metadata.
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CoreError::EmptyPackageId);
        }
        let version_string = version.into();
        let version = PackageVersion::parse(&version_string)?;

        Ok(Self {
            id,
            version_string,
            version,
            downloads: 0,
            listed: true,
            title: None,
            description: None,
            summary: None,
            authors: Vec::new(),
            tags: Vec::new(),
            icon_url: None,
            license_url: None,
            project_url: None,
        })
    }

    pub fn with_downloads(mut self, downloads: u64) -> Self {
        self.downloads = downloads;
        self
    }

    pub fn with_listed(mut self, listed: bool) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// The locale-independent case fold of the id used for matching and grouping.
    pub fn folded_id(&self) -> String {
        fold_case(&self.id)
    }

    pub fn is_prerelease(&self) -> bool {
        self.version.is_prerelease()
    }
}

/// Flat serde shape of a [`PackageRow`], as read from import files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecord {
    pub id: String,
    pub version: String,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default = "default_listed")]
    pub listed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
}

fn default_listed() -> bool {
    true
}

impl TryFrom<PackageRecord> for PackageRow {
    type Error = CoreError;

    fn try_from(record: PackageRecord) -> Result<Self> {
        let mut row = PackageRow::new(record.id, record.version)?
            .with_downloads(record.downloads)
            .with_listed(record.listed);
        row.title = record.title;
        row.description = record.description;
        row.summary = record.summary;
        row.authors = record.authors;
        row.tags = record.tags;
        row.icon_url = record.icon_url;
        row.license_url = record.license_url;
        row.project_url = record.project_url;
        Ok(row)
    }
}

impl From<PackageRow> for PackageRecord {
    fn from(row: PackageRow) -> Self {
        Self {
            id: row.id,
            version: row.version_string,
            downloads: row.downloads,
            listed: row.listed,
            title: row.title,
            description: row.description,
            summary: row.summary,
            authors: row.authors,
            tags: row.tags,
            icon_url: row.icon_url,
            license_url: row.license_url,
            project_url: row.project_url,
        }
    }
}

/// A single version line inside a [`SearchResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultVersion {
    pub version: String,
    pub downloads: u64,
}

/// One package in a search page.
///
/// Display fields come from the group's latest version. `versions` and
/// `total_downloads` only cover the rows that fell inside the requested
/// pagination window, not every version ever published for the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub version: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
    pub icon_url: Option<String>,
    pub license_url: Option<String>,
    pub project_url: Option<String>,
    pub total_downloads: u64,
    pub versions: Vec<SearchResultVersion>,
}

impl SearchResult {
    /// Authors joined for display, e.g. `"Jane, John"`.
    pub fn authors_display(&self) -> String {
        self.authors.join(", ")
    }
}
