//! Where a panel gets its full candidate list on each render.

use crate::store::{LocalStore, StoredRecord};
use log::{debug, warn};
use std::str::FromStr;
use std::sync::Arc;

/// Supplies the unfiltered records for one panel.
pub trait RecordSource<R> {
    /// Never fails; unavailable data loads as an empty list.
    fn load(&mut self) -> Vec<R>;
}

/// In-memory records, e.g. the built-in event listing.
impl<R: Clone> RecordSource<R> for Vec<R> {
    fn load(&mut self) -> Vec<R> {
        self.clone()
    }
}

/// When a store-backed source goes back to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadPolicy {
    /// Read the collection on every render.
    #[default]
    Reload,
    /// Keep the last read until the store reports a newer write.
    Cache,
}

impl ReadPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reload => "reload",
            Self::Cache => "cache",
        }
    }
}

impl FromStr for ReadPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reload" => Ok(Self::Reload),
            "cache" => Ok(Self::Cache),
            other => Err(format!(
                "unsupported read policy `{other}`; expected reload|cache"
            )),
        }
    }
}

struct CachedRead<R> {
    generation: u64,
    records: Vec<R>,
}

/// Records of one collection read from the shared [`LocalStore`].
pub struct StoreSource<R> {
    store: Arc<LocalStore>,
    policy: ReadPolicy,
    cache: Option<CachedRead<R>>,
    reads: u64,
}

impl<R> StoreSource<R> {
    pub fn new(store: Arc<LocalStore>, policy: ReadPolicy) -> Self {
        Self {
            store,
            policy,
            cache: None,
            reads: 0,
        }
    }

    /// Number of times the store was actually queried.
    pub fn store_reads(&self) -> u64 {
        self.reads
    }
}

impl<R: StoredRecord + Clone> RecordSource<R> for StoreSource<R> {
    fn load(&mut self) -> Vec<R> {
        let generation = self.store.write_generation();
        if self.policy == ReadPolicy::Cache {
            if let Some(cached) = &self.cache {
                if cached.generation == generation {
                    return cached.records.clone();
                }
            }
        }

        self.reads += 1;
        match self.store.get_all::<R>() {
            Ok(records) => {
                debug!(
                    "event=collection_load module=render status=ok collection={} count={}",
                    R::COLLECTION,
                    records.len()
                );
                if self.policy == ReadPolicy::Cache {
                    self.cache = Some(CachedRead {
                        generation,
                        records: records.clone(),
                    });
                }
                records
            }
            Err(err) => {
                // Already logged by the store; the panel shows an empty list.
                warn!(
                    "event=collection_load module=render status=degraded collection={} error_code={}",
                    R::COLLECTION,
                    err.code()
                );
                self.cache = None;
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ReadPolicy, RecordSource, StoreSource};
    use crate::model::club::Club;
    use crate::seed::default_clubs;
    use crate::store::LocalStore;
    use std::sync::Arc;

    #[test]
    fn reload_policy_reads_every_time() {
        let store = Arc::new(LocalStore::in_memory());
        let mut source: StoreSource<Club> = StoreSource::new(store, ReadPolicy::Reload);

        source.load();
        source.load();
        assert_eq!(source.store_reads(), 2);
    }

    #[test]
    fn cache_policy_rereads_only_after_a_write() {
        let store = Arc::new(LocalStore::in_memory());
        let mut source: StoreSource<Club> =
            StoreSource::new(Arc::clone(&store), ReadPolicy::Cache);

        assert!(source.load().is_empty());
        assert!(source.load().is_empty());
        assert_eq!(source.store_reads(), 1);

        store.seed_if_empty(&default_clubs()).expect("seed should succeed");
        assert_eq!(source.load().len(), 4);
        assert_eq!(source.load().len(), 4);
        assert_eq!(source.store_reads(), 2);
    }

    #[test]
    fn read_policy_parses_case_insensitively() {
        let policy = "Cache"
            .parse::<ReadPolicy>()
            .expect("policy name should parse");
        assert_eq!(policy, ReadPolicy::Cache);
        assert!("sometimes".parse::<ReadPolicy>().is_err());
    }
}
