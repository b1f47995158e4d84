//! The read-only catalog capability queried by the search service.

use std::{convert::Infallible, sync::Arc};

use tracing::trace;

use crate::{package::PackageRow, query::RowQuery};

/// Read access to the package catalog.
///
/// Implementations return the rows matching `query.filter`, sorted by
/// `query.order`. They may stop after `query.limit` rows. Errors are passed
/// to callers of the search service untouched.
pub trait Catalog {
    type Error: std::error::Error + Send + Sync + 'static;

    fn rows(&self, query: &RowQuery) -> Result<Vec<PackageRow>, Self::Error>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    type Error = C::Error;

    fn rows(&self, query: &RowQuery) -> Result<Vec<PackageRow>, Self::Error> {
        (**self).rows(query)
    }
}

impl<C: Catalog + ?Sized> Catalog for Arc<C> {
    type Error = C::Error;

    fn rows(&self, query: &RowQuery) -> Result<Vec<PackageRow>, Self::Error> {
        (**self).rows(query)
    }
}

/// A catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    rows: Vec<PackageRow>,
}

impl MemoryCatalog {
    pub fn new(rows: impl IntoIterator<Item = PackageRow>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// Adds a row, replacing any row with the same (case-folded) id and version string.
    pub fn insert(&mut self, row: PackageRow) {
        match self
            .rows
            .iter_mut()
            .find(|r| r.version_string == row.version_string && r.folded_id() == row.folded_id())
        {
            Some(existing) => *existing = row,
            None => self.rows.push(row),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Catalog for MemoryCatalog {
    type Error = Infallible;

    fn rows(&self, query: &RowQuery) -> Result<Vec<PackageRow>, Self::Error> {
        let mut rows: Vec<PackageRow> = self
            .rows
            .iter()
            .filter(|row| query.filter.matches(row))
            .cloned()
            .collect();
        rows.sort_by(|a, b| query.order.compare(a, b));
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        trace!(
            total = self.rows.len(),
            matched = rows.len(),
            "scanned memory catalog"
        );
        Ok(rows)
    }
}
