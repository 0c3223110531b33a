//! Versioned schema for the local store.
//!
//! # Invariants
//! - Versions are strictly increasing and mirrored to `PRAGMA user_version`.
//! - Pending migrations run inside one transaction.
//! - A database newer than this binary is rejected, never downgraded.

use crate::db::{DbError, DbResult, OpenStage, StoreLocation};
use log::info;
use rusqlite::Connection;

struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_init.sql"),
}];

/// Schema version a freshly opened store ends up at.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Brings the database at `location` up to [`latest_version`].
pub(crate) fn apply_migrations(conn: &mut Connection, location: &StoreLocation) -> DbResult<()> {
    let failed = |source| DbError::sqlite(location, OpenStage::Migrate, source);
    let from = schema_version(conn).map_err(failed)?;
    let latest = latest_version();

    if from > latest {
        return Err(DbError::SchemaTooNew {
            location: location.clone(),
            found: from,
            supported: latest,
        });
    }
    if from == latest {
        return Ok(());
    }

    let tx = conn.transaction().map_err(failed)?;
    for migration in MIGRATIONS.iter().filter(|m| m.version > from) {
        tx.execute_batch(migration.sql).map_err(failed)?;
        tx.pragma_update(None, "user_version", migration.version)
            .map_err(failed)?;
    }
    tx.commit().map_err(failed)?;

    info!("event=db_migrate module=db status=ok from={from} to={latest}");
    Ok(())
}

/// Reads the schema version recorded in `PRAGMA user_version`.
pub fn schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
}
