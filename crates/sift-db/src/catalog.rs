//! [`Catalog`] implementation over a SQLite database.

use std::{
    path::Path,
    sync::{Mutex, MutexGuard},
};

use sift_core::{Catalog, PackageRow, RowQuery};
use tracing::{debug, trace};

use crate::{
    connection::DbConnection,
    error::{DbError, Result},
    repository::PackageRepository,
};

/// A package catalog stored in SQLite.
///
/// The single connection sits behind a mutex, so one catalog can be shared
/// between threads; every read runs under one lock acquisition.
pub struct SqliteCatalog {
    conn: Mutex<DbConnection>,
}

impl SqliteCatalog {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!(path = %path.as_ref().display(), "opening catalog database");
        Ok(Self::from_connection(DbConnection::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::from_connection(DbConnection::open_in_memory()?))
    }

    pub fn from_connection(conn: DbConnection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn conn(&self) -> Result<MutexGuard<'_, DbConnection>> {
        self.conn.lock().map_err(|_| DbError::PoisonError)
    }

    /// Stores rows, replacing existing rows with the same id and version.
    /// Returns the number of rows written.
    pub fn import(&self, rows: &[PackageRow]) -> Result<usize> {
        let mut conn = self.conn()?;
        let written = PackageRepository::import(conn.conn(), rows, false)?;
        debug!(written = written, "imported catalog rows");
        Ok(written)
    }

    /// Swaps the whole catalog for `rows` atomically. On error the previous
    /// rows are kept.
    pub fn replace(&self, rows: &[PackageRow]) -> Result<usize> {
        let mut conn = self.conn()?;
        let written = PackageRepository::import(conn.conn(), rows, true)?;
        debug!(written = written, "replaced catalog rows");
        Ok(written)
    }

    pub fn insert(&self, row: &PackageRow) -> Result<()> {
        let mut conn = self.conn()?;
        PackageRepository::upsert(conn.conn(), row)?;
        Ok(())
    }

    pub fn count(&self) -> Result<u64> {
        let mut conn = self.conn()?;
        let count = PackageRepository::count(conn.conn())?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    pub fn clear(&self) -> Result<usize> {
        let mut conn = self.conn()?;
        Ok(PackageRepository::delete_all(conn.conn())?)
    }
}

impl Catalog for SqliteCatalog {
    type Error = DbError;

    fn rows(&self, query: &RowQuery) -> Result<Vec<PackageRow>> {
        let packages = {
            let mut conn = self.conn()?;
            PackageRepository::query(conn.conn(), query)?
        };
        trace!(rows = packages.len(), "loaded catalog rows");

        packages.into_iter().map(PackageRow::try_from).collect()
    }
}
