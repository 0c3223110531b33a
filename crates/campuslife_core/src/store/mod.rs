//! Local record store for clubs and rooms.
//!
//! # Responsibility
//! - Lazily open the versioned SQLite database exactly once.
//! - Seed empty collections with default records.
//! - Read whole collections and look records up by secondary index.
//!
//! # Invariants
//! - The first `open` runs migrations; later calls reuse the same connection.
//! - The emptiness check and the seed inserts share one IMMEDIATE transaction,
//!   so a collection is never seeded twice and a failed seed leaves no rows.
//! - Record keys come from `AUTOINCREMENT` and are never reused.
//! - `write_generation` increases after every committed write.

use crate::db::{open_db_at, DbError, StoreLocation};
use log::{debug, error, info};
use once_cell::sync::OnceCell;
use rusqlite::{Connection, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

pub mod collection;

pub use collection::{Collection, StoredRecord};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer failures.
#[derive(Debug)]
pub enum StoreError {
    /// Storage could not be opened or migrated.
    Unavailable(DbError),
    /// A previous holder of the connection panicked mid-operation.
    LockPoisoned,
    ReadFailure {
        collection: Collection,
        source: rusqlite::Error,
    },
    /// Seeding failed; the transaction was rolled back.
    SeedWriteFailure {
        collection: Collection,
        source: rusqlite::Error,
    },
    UnknownIndex {
        collection: Collection,
        index: String,
    },
    /// A persisted row cannot be decoded into its record type.
    InvalidData {
        collection: Collection,
        message: String,
    },
    /// SQLite error not yet attributed to a read or a seed.
    Sqlite(rusqlite::Error),
}

impl StoreError {
    fn during_read(self, collection: Collection) -> Self {
        match self {
            Self::Sqlite(source) => Self::ReadFailure { collection, source },
            other => other,
        }
    }

    fn during_seed(self, collection: Collection) -> Self {
        match self {
            Self::Sqlite(source) => Self::SeedWriteFailure { collection, source },
            other => other,
        }
    }

    /// Stable short code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "store_unavailable",
            Self::LockPoisoned => "store_lock_poisoned",
            Self::ReadFailure { .. } => "store_read_failed",
            Self::SeedWriteFailure { .. } => "store_seed_failed",
            Self::UnknownIndex { .. } => "store_unknown_index",
            Self::InvalidData { .. } => "store_invalid_data",
            Self::Sqlite(_) => "store_sqlite",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(err) => write!(f, "local store unavailable: {err}"),
            Self::LockPoisoned => write!(f, "local store connection lock is poisoned"),
            Self::ReadFailure { collection, source } => {
                write!(f, "failed to read `{collection}`: {source}")
            }
            Self::SeedWriteFailure { collection, source } => {
                write!(f, "failed to seed `{collection}`: {source}")
            }
            Self::UnknownIndex { collection, index } => {
                write!(f, "collection `{collection}` has no index `{index}`")
            }
            Self::InvalidData {
                collection,
                message,
            } => write!(f, "invalid `{collection}` row: {message}"),
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable(err) => Some(err),
            Self::ReadFailure { source, .. } | Self::SeedWriteFailure { source, .. } => {
                Some(source)
            }
            Self::Sqlite(err) => Some(err),
            Self::LockPoisoned | Self::UnknownIndex { .. } | Self::InvalidData { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Result of [`LocalStore::seed_if_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection was empty and this many records were inserted.
    Seeded(usize),
    /// The collection already held this many records; nothing was written.
    AlreadyPopulated(u64),
}

/// Lazily-opened local database shared by every reader.
///
/// `LocalStore` is `Sync`; wrap it in an `Arc` to share one connection.
pub struct LocalStore {
    location: StoreLocation,
    conn: OnceCell<Mutex<Connection>>,
    generation: AtomicU64,
}

impl LocalStore {
    /// Creates an unopened store. Nothing touches storage until [`Self::open`].
    pub fn new(location: StoreLocation) -> Self {
        Self {
            location,
            conn: OnceCell::new(),
            generation: AtomicU64::new(0),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(StoreLocation::InMemory)
    }

    pub fn is_open(&self) -> bool {
        self.conn.get().is_some()
    }

    /// Returns the shared handle, opening and migrating on first use.
    ///
    /// Concurrent first callers block until the single initialization ends.
    /// A failed open is not cached; the next call tries again.
    pub fn open(&self) -> StoreResult<StoreHandle<'_>> {
        let conn = self
            .conn
            .get_or_try_init(|| open_db_at(&self.location).map(Mutex::new))
            .map_err(|err| {
                error!(
                    "event=store_open module=store status=error error_code=store_unavailable stage={} location={} error={err}",
                    err.stage(),
                    err.location()
                );
                StoreError::Unavailable(err)
            })?;
        Ok(StoreHandle { store: self, conn })
    }

    /// Inserts `records` into their collection only when it is empty.
    pub fn seed_if_empty<R: StoredRecord>(&self, records: &[R]) -> StoreResult<SeedOutcome> {
        let collection = R::COLLECTION;
        let outcome = self.open().and_then(|handle| handle.seed_if_empty(records));
        match &outcome {
            Ok(SeedOutcome::Seeded(inserted)) => info!(
                "event=store_seed module=store status=ok collection={collection} inserted={inserted}"
            ),
            Ok(SeedOutcome::AlreadyPopulated(existing)) => debug!(
                "event=store_seed module=store status=skipped collection={collection} existing={existing}"
            ),
            Err(err) => error!(
                "event=store_seed module=store status=error collection={collection} error_code={} error={err}",
                err.code()
            ),
        }
        outcome
    }

    /// Returns every record of `R`'s collection in insertion order.
    pub fn get_all<R: StoredRecord>(&self) -> StoreResult<Vec<R>> {
        self.logged_read(R::COLLECTION, |handle| handle.get_all())
    }

    /// Returns records whose indexed `index` column equals `value`.
    pub fn find_by_index<R: StoredRecord>(&self, index: &str, value: &str) -> StoreResult<Vec<R>> {
        self.logged_read(R::COLLECTION, |handle| handle.find_by_index(index, value))
    }

    pub fn count(&self, collection: Collection) -> StoreResult<u64> {
        self.logged_read(collection, |handle| handle.count(collection))
    }

    /// Counter bumped after every committed write.
    pub fn write_generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    fn logged_read<T>(
        &self,
        collection: Collection,
        read: impl FnOnce(StoreHandle<'_>) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let result = self.open().and_then(read);
        if let Err(err) = &result {
            error!(
                "event=store_read module=store status=error collection={collection} error_code={} error={err}",
                err.code()
            );
        }
        result
    }
}

/// Borrowed access to an opened [`LocalStore`].
#[derive(Clone, Copy)]
pub struct StoreHandle<'s> {
    store: &'s LocalStore,
    conn: &'s Mutex<Connection>,
}

impl StoreHandle<'_> {
    pub fn seed_if_empty<R: StoredRecord>(&self, records: &[R]) -> StoreResult<SeedOutcome> {
        let collection = R::COLLECTION;
        let mut conn = self.lock()?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|err| StoreError::from(err).during_seed(collection))?;

        let existing = count_rows(&tx, collection).map_err(|err| err.during_seed(collection))?;
        if existing > 0 {
            return Ok(SeedOutcome::AlreadyPopulated(existing));
        }

        for record in records {
            record
                .insert(&tx)
                .map_err(|err| err.during_seed(collection))?;
        }
        tx.commit()
            .map_err(|err| StoreError::from(err).during_seed(collection))?;

        if !records.is_empty() {
            self.store.generation.fetch_add(1, Ordering::AcqRel);
        }
        Ok(SeedOutcome::Seeded(records.len()))
    }

    pub fn get_all<R: StoredRecord>(&self) -> StoreResult<Vec<R>> {
        let collection = R::COLLECTION;
        let conn = self.lock()?;
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id ASC;",
            R::COLUMNS,
            collection.name()
        );
        query_records(&conn, &sql, &[]).map_err(|err| err.during_read(collection))
    }

    pub fn find_by_index<R: StoredRecord>(&self, index: &str, value: &str) -> StoreResult<Vec<R>> {
        let collection = R::COLLECTION;
        // Column names cannot be bound as parameters; only whitelisted ones
        // reach the SQL text.
        let Some(column) = collection
            .secondary_indexes()
            .into_iter()
            .find(|candidate| *candidate == index)
        else {
            return Err(StoreError::UnknownIndex {
                collection,
                index: index.to_string(),
            });
        };

        let conn = self.lock()?;
        let sql = format!(
            "SELECT {} FROM {} WHERE {column} = ?1 ORDER BY id ASC;",
            R::COLUMNS,
            collection.name()
        );
        query_records(&conn, &sql, &[value]).map_err(|err| err.during_read(collection))
    }

    pub fn count(&self, collection: Collection) -> StoreResult<u64> {
        let conn = self.lock()?;
        count_rows(&conn, collection).map_err(|err| err.during_read(collection))
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

fn count_rows(conn: &Connection, collection: Collection) -> StoreResult<u64> {
    let sql = format!("SELECT COUNT(*) FROM {};", collection.name());
    let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
    u64::try_from(count).map_err(|_| StoreError::InvalidData {
        collection,
        message: format!("negative row count {count}"),
    })
}

fn query_records<R: StoredRecord>(
    conn: &Connection,
    sql: &str,
    bind: &[&str],
) -> StoreResult<Vec<R>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(rusqlite::params_from_iter(bind.iter()))?;
    let mut records = Vec::new();

    while let Some(row) = rows.next()? {
        records.push(R::from_row(row)?);
    }

    Ok(records)
}
