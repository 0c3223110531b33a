//! SQLite bootstrap for the local store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Apply schema migrations before any record access.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A connection is only handed out after migrations succeeded.
//! - Every bootstrap failure names the location and the stage that failed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_at, open_db_in_memory, StoreLocation};

pub type DbResult<T> = Result<T, DbError>;

/// Bootstrap step that was running when opening the database failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStage {
    /// Opening or creating the SQLite file.
    Connect,
    /// Connection settings such as the busy timeout.
    Configure,
    /// Reading or upgrading the schema version.
    Migrate,
}

impl OpenStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Configure => "configure",
            Self::Migrate => "migrate",
        }
    }
}

impl Display for OpenStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to bring a store database into a usable state.
#[derive(Debug)]
pub enum DbError {
    /// SQLite rejected `stage` for `location`.
    Sqlite {
        location: StoreLocation,
        stage: OpenStage,
        source: rusqlite::Error,
    },
    /// `location` was written by a schema newer than this build knows.
    SchemaTooNew {
        location: StoreLocation,
        found: u32,
        supported: u32,
    },
}

impl DbError {
    pub(crate) fn sqlite(
        location: &StoreLocation,
        stage: OpenStage,
        source: rusqlite::Error,
    ) -> Self {
        Self::Sqlite {
            location: location.clone(),
            stage,
            source,
        }
    }

    pub fn location(&self) -> &StoreLocation {
        match self {
            Self::Sqlite { location, .. } | Self::SchemaTooNew { location, .. } => location,
        }
    }

    pub fn stage(&self) -> OpenStage {
        match self {
            Self::Sqlite { stage, .. } => *stage,
            Self::SchemaTooNew { .. } => OpenStage::Migrate,
        }
    }

    /// Stable short code used in `db_open` log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::SchemaTooNew { .. } => "db_schema_too_new",
            Self::Sqlite { stage, .. } => match stage {
                OpenStage::Connect => "db_connect_failed",
                OpenStage::Configure => "db_configure_failed",
                OpenStage::Migrate => "db_migrate_failed",
            },
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite {
                location,
                stage,
                source,
            } => write!(f, "{stage} failed for database `{location}`: {source}"),
            Self::SchemaTooNew {
                location,
                found,
                supported,
            } => write!(
                f,
                "database `{location}` has schema version {found}, this build supports up to {supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite { source, .. } => Some(source),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DbError, OpenStage, StoreLocation};

    #[test]
    fn schema_errors_belong_to_migrate_stage() {
        let err = DbError::SchemaTooNew {
            location: StoreLocation::InMemory,
            found: 7,
            supported: 1,
        };
        assert_eq!(err.stage(), OpenStage::Migrate);
        assert_eq!(err.code(), "db_schema_too_new");
        assert!(err.to_string().contains(":memory:"));
    }

    #[test]
    fn sqlite_errors_report_stage_code() {
        let err = DbError::sqlite(
            &StoreLocation::File("/tmp/campus.db".into()),
            OpenStage::Configure,
            rusqlite::Error::InvalidQuery,
        );
        assert_eq!(err.code(), "db_configure_failed");
        assert!(err
            .to_string()
            .starts_with("configure failed for database `/tmp/campus.db`"));
    }
}
