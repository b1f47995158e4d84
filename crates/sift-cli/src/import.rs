use std::fs;

use sift_core::PackageRow;
use sift_db::SqliteCatalog;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Reads a JSON array of package rows.
pub fn read_rows(path: &str) -> CliResult<Vec<PackageRow>> {
    let content = fs::read_to_string(path).map_err(|source| CliError::IoError {
        action: format!("reading {path}"),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CliError::ImportFormat {
        path: path.to_string(),
        source,
    })
}

pub fn import_rows(catalog: &SqliteCatalog, path: &str, replace: bool) -> CliResult<usize> {
    let rows = read_rows(path)?;
    debug!(path = path, rows = rows.len(), "read import file");

    let written = if replace {
        catalog.replace(&rows)?
    } else {
        catalog.import(&rows)?
    };
    info!(
        written = written,
        total = catalog.count()?,
        "Imported {written} package rows from {path}"
    );

    Ok(written)
}
