use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::debug;

use crate::error::{DbError, Result};

pub const CATALOG_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn apply_migrations(conn: &mut SqliteConnection) -> Result<()> {
    let applied = conn
        .run_pending_migrations(CATALOG_MIGRATIONS)
        .map_err(|e| DbError::MigrationError(e.to_string()))?;

    if !applied.is_empty() {
        debug!(count = applied.len(), "applied catalog migrations");
    }
    Ok(())
}
