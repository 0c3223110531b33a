//! Application configuration.
//!
//! Hosts build an [`AppConfig`] from their own inputs (CLI flags, tests) and
//! hand it to [`crate::app::CampusLife`]. There is no environment or file
//! based configuration.

use crate::db::StoreLocation;
use crate::logging::default_log_level;
use crate::render::ReadPolicy;
use crate::search::controller::DEFAULT_SEARCH_DEBOUNCE;
use std::path::PathBuf;
use std::time::Duration;

/// Default database file name when a host stores data on disk.
pub const DB_FILE_NAME: &str = "campus_life.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store: StoreLocation,
    /// Quiet period before a search fires.
    pub debounce: Duration,
    pub read_policy: ReadPolicy,
    pub log_level: String,
    /// Rolling log directory; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreLocation::InMemory,
            debounce: DEFAULT_SEARCH_DEBOUNCE,
            read_policy: ReadPolicy::default(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Stores data in [`DB_FILE_NAME`] under `dir`.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.store = StoreLocation::File(dir.into().join(DB_FILE_NAME));
        self
    }

    /// Starts logging as configured.
    pub fn init_logging(&self) -> Result<(), String> {
        match &self.log_dir {
            Some(dir) => crate::logging::init_logging(&self.log_level, dir),
            None => crate::logging::init_stderr_logging(&self.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DB_FILE_NAME};
    use crate::db::StoreLocation;
    use crate::render::ReadPolicy;
    use std::path::Path;
    use std::time::Duration;

    #[test]
    fn defaults_match_page_behavior() {
        let config = AppConfig::default();
        assert_eq!(config.store, StoreLocation::InMemory);
        assert_eq!(config.debounce, Duration::from_millis(300));
        assert_eq!(config.read_policy, ReadPolicy::Reload);
    }

    #[test]
    fn data_dir_points_at_db_file() {
        let config = AppConfig::default().with_data_dir("/var/campus");
        assert_eq!(
            config.store,
            StoreLocation::File(Path::new("/var/campus").join(DB_FILE_NAME))
        );
    }
}
