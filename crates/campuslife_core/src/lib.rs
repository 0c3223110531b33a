//! Core of the campus-life page: events, clubs and rooms with a debounced
//! type-as-you-search filter over all three lists.
//!
//! Hosts create a [`CampusLife`] over a [`Document`], call
//! [`CampusLife::load`], then feed search input events and poll for due
//! searches.

pub mod app;
pub mod config;
pub mod db;
pub mod escape;
pub mod logging;
pub mod model;
pub mod render;
pub mod search;
pub mod seed;
pub mod store;

pub use app::CampusLife;
pub use config::AppConfig;
pub use db::{DbError, OpenStage, StoreLocation};
pub use escape::escape_html;
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status};
pub use model::club::Club;
pub use model::event::Event;
pub use model::room::Room;
pub use render::{Document, ReadPolicy, SharedDocument};
pub use search::controller::{Activation, SearchController, SearchListener};
pub use search::debounce::{debounce, Debounced, Debouncer};
pub use search::filter::{filter_by, filter_records, Searchable};
pub use search::sanitize::{sanitize_search_term, MAX_SEARCH_TERM_CHARS};
pub use store::{Collection, LocalStore, SeedOutcome, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
