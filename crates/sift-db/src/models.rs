use diesel::prelude::*;
use sift_core::PackageRow;

use crate::{
    error::{DbError, Result},
    schema::packages,
};

/// A stored catalog row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = packages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Package {
    pub pk: i32,
    pub package_id: String,
    pub package_id_lower: String,
    pub version: String,
    pub normalized_version: String,
    pub is_prerelease: bool,
    pub downloads: i64,
    pub listed: bool,
    pub title: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub authors: String,
    pub tags: String,
    pub icon_url: Option<String>,
    pub license_url: Option<String>,
    pub project_url: Option<String>,
}

/// Insert/update shape of a catalog row.
///
/// The folded id, normalized version and prerelease flag are derived once at
/// write time so reads can filter and order on plain columns.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = packages)]
#[diesel(treat_none_as_null = true)]
pub struct NewPackage<'a> {
    pub package_id: &'a str,
    pub package_id_lower: String,
    pub version: &'a str,
    pub normalized_version: String,
    pub is_prerelease: bool,
    pub downloads: i64,
    pub listed: bool,
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub summary: Option<&'a str>,
    pub authors: String,
    pub tags: String,
    pub icon_url: Option<&'a str>,
    pub license_url: Option<&'a str>,
    pub project_url: Option<&'a str>,
}

impl<'a> TryFrom<&'a PackageRow> for NewPackage<'a> {
    type Error = DbError;

    fn try_from(row: &'a PackageRow) -> Result<Self> {
        let downloads = i64::try_from(row.downloads).map_err(|_| {
            DbError::IntegrityError(format!(
                "{}@{}: download count {} does not fit in a signed 64-bit column",
                row.id, row.version_string, row.downloads
            ))
        })?;

        Ok(Self {
            package_id: &row.id,
            package_id_lower: row.folded_id(),
            version: &row.version_string,
            normalized_version: row.version.to_string(),
            is_prerelease: row.is_prerelease(),
            downloads,
            listed: row.listed,
            title: row.title.as_deref(),
            description: row.description.as_deref(),
            summary: row.summary.as_deref(),
            authors: to_json(&row.authors),
            tags: to_json(&row.tags),
            icon_url: row.icon_url.as_deref(),
            license_url: row.license_url.as_deref(),
            project_url: row.project_url.as_deref(),
        })
    }
}

impl TryFrom<Package> for PackageRow {
    type Error = DbError;

    fn try_from(pkg: Package) -> Result<Self> {
        let mut row = PackageRow::new(pkg.package_id, pkg.version).map_err(|e| {
            DbError::IntegrityError(format!("row {}: {e}", pkg.pk))
        })?;
        row.downloads = u64::try_from(pkg.downloads).unwrap_or(0);
        row.listed = pkg.listed;
        row.title = pkg.title;
        row.description = pkg.description;
        row.summary = pkg.summary;
        row.authors = from_json(&pkg.authors);
        row.tags = from_json(&pkg.tags);
        row.icon_url = pkg.icon_url;
        row.license_url = pkg.license_url;
        row.project_url = pkg.project_url;
        Ok(row)
    }
}

fn to_json(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

fn from_json(value: &str) -> Vec<String> {
    serde_json::from_str(value).unwrap_or_default()
}
