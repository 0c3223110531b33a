//! Connection bootstrap.
//!
//! # Invariants
//! - Returned connections have migrations fully applied.
//! - Every open attempt emits one `db_open` start event and one outcome event.

use super::migrations::apply_migrations;
use super::{DbError, DbResult, OpenStage};
use log::{error, info};
use rusqlite::Connection;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Where the local store keeps its data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoreLocation {
    /// Lives as long as the connection; nothing touches disk.
    #[default]
    InMemory,
    File(PathBuf),
}

impl StoreLocation {
    fn mode(&self) -> &'static str {
        match self {
            Self::InMemory => "memory",
            Self::File(_) => "file",
        }
    }
}

impl Display for StoreLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InMemory => write!(f, ":memory:"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Opens a database file and applies pending migrations.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_db_at(&StoreLocation::File(path.as_ref().to_path_buf()))
}

/// Opens a private in-memory database with the current schema.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_db_at(&StoreLocation::InMemory)
}

/// Opens `location` and applies pending migrations.
///
/// # Side effects
/// - Creates the file (not its parent directories) when missing.
/// - Emits `db_open` log events with duration, status and the failed stage.
pub fn open_db_at(location: &StoreLocation) -> DbResult<Connection> {
    let started_at = Instant::now();
    let mode = location.mode();
    info!("event=db_open module=db status=start mode={mode}");

    match connect(location) {
        Ok(conn) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} stage={} duration_ms={} error_code={} error={err}",
                err.stage(),
                started_at.elapsed().as_millis(),
                err.code()
            );
            Err(err)
        }
    }
}

fn connect(location: &StoreLocation) -> DbResult<Connection> {
    let opened = match location {
        StoreLocation::InMemory => Connection::open_in_memory(),
        StoreLocation::File(path) => Connection::open(path),
    };
    let mut conn = opened.map_err(|err| DbError::sqlite(location, OpenStage::Connect, err))?;

    conn.busy_timeout(Duration::from_secs(5))
        .map_err(|err| DbError::sqlite(location, OpenStage::Configure, err))?;
    apply_migrations(&mut conn, location)?;
    Ok(conn)
}
