//! Catalog queries and writes over the `packages` table.

use diesel::{dsl::sql, prelude::*, sql_types::Bool, sql_types::Text};
use sift_core::{PackageRow, RowOrder, RowQuery, TextMatch};

use crate::{
    error::{DbError, Result},
    models::{NewPackage, Package},
    schema::packages,
};

/// Repository for catalog rows.
pub struct PackageRepository;

impl PackageRepository {
    /// Loads the listed rows selected by `query`, in the requested order.
    ///
    /// Substring matching uses `instr` on the pre-folded id column so the
    /// query text is taken literally (no `LIKE` wildcards).
    pub fn query(conn: &mut SqliteConnection, query: &RowQuery) -> QueryResult<Vec<Package>> {
        let mut select = packages::table
            .filter(packages::listed.eq(true))
            .into_boxed();

        if !query.filter.include_prerelease {
            select = select.filter(packages::is_prerelease.eq(false));
        }

        match &query.filter.text {
            TextMatch::Any => {}
            TextMatch::Contains(needle) => {
                select = select.filter(
                    sql::<Bool>("instr(package_id_lower, ")
                        .bind::<Text, _>(needle.as_str())
                        .sql(") > 0"),
                );
            }
            TextMatch::Exact(id) => {
                select = select.filter(packages::package_id_lower.eq(id.as_str()));
            }
        }

        select = match query.order {
            RowOrder::DownloadsDesc => select.order((
                packages::downloads.desc(),
                packages::package_id_lower.asc(),
                packages::version.asc(),
                packages::package_id.asc(),
            )),
            RowOrder::VersionStringDesc => {
                select.order((packages::version.desc(), packages::package_id.asc()))
            }
        };

        if let Some(limit) = query.limit {
            select = select.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        select.select(Package::as_select()).load(conn)
    }

    /// Inserts a row, or overwrites the stored row with the same folded id and version.
    pub fn upsert(conn: &mut SqliteConnection, row: &PackageRow) -> Result<usize> {
        let new_package = NewPackage::try_from(row)?;
        Ok(diesel::insert_into(packages::table)
            .values(&new_package)
            .on_conflict((packages::package_id_lower, packages::version))
            .do_update()
            .set(&new_package)
            .execute(conn)?)
    }

    /// Upserts many rows in one transaction. With `replace`, every existing
    /// row is deleted first in the same transaction, so a failed import
    /// leaves the catalog untouched.
    pub fn import(
        conn: &mut SqliteConnection,
        rows: &[PackageRow],
        replace: bool,
    ) -> Result<usize> {
        conn.transaction::<_, DbError, _>(|conn| {
            if replace {
                Self::delete_all(conn)?;
            }

            let mut written = 0;
            for row in rows {
                written += Self::upsert(conn, row)?;
            }
            Ok(written)
        })
    }

    /// Counts all stored rows, listed or not.
    pub fn count(conn: &mut SqliteConnection) -> QueryResult<i64> {
        packages::table.count().get_result(conn)
    }

    /// Deletes every row (for reimport).
    pub fn delete_all(conn: &mut SqliteConnection) -> QueryResult<usize> {
        diesel::delete(packages::table).execute(conn)
    }
}
