//! Page-level application context.
//!
//! # Responsibility
//! - Own the store handle, the document and the search controller.
//! - Wire the events, clubs and rooms panels to the search broadcast.
//! - Run page-load seeding followed by the initial render.
//!
//! # Invariants
//! - Seeding failures are logged and never prevent the initial render.
//! - Every panel renders against the controller's latest term.

use crate::config::AppConfig;
use crate::model::club::Club;
use crate::model::event::Event;
use crate::model::room::Room;
use crate::render::{Document, Panel, SharedDocument, StoreSource};
use crate::search::controller::{Activation, SearchController};
use crate::seed::{default_clubs, default_events, default_rooms};
use crate::store::{LocalStore, StoreResult};
use log::{info, warn};
use std::cell::Ref;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

/// One campus-life page instance.
pub struct CampusLife {
    store: Arc<LocalStore>,
    document: SharedDocument,
    controller: SearchController,
}

impl CampusLife {
    /// Creates the page with its own store at `config.store`.
    pub fn new(config: &AppConfig, document: SharedDocument) -> Self {
        let store = Arc::new(LocalStore::new(config.store.clone()));
        Self::with_store(store, config, document)
    }

    /// Creates the page over an existing, possibly shared, store.
    pub fn with_store(
        store: Arc<LocalStore>,
        config: &AppConfig,
        document: SharedDocument,
    ) -> Self {
        let mut controller = SearchController::new(config.debounce);
        controller.subscribe(Panel::<Event, _>::new(
            default_events(),
            Rc::clone(&document),
        ));
        controller.subscribe(Panel::<Club, _>::new(
            StoreSource::new(Arc::clone(&store), config.read_policy),
            Rc::clone(&document),
        ));
        controller.subscribe(Panel::<Room, _>::new(
            StoreSource::new(Arc::clone(&store), config.read_policy),
            Rc::clone(&document),
        ));

        Self {
            store,
            document,
            controller,
        }
    }

    /// Seeds clubs and rooms independently.
    ///
    /// Both collections are attempted; the first failure is returned.
    pub fn seed_initial_data(&self) -> StoreResult<()> {
        let clubs = self.store.seed_if_empty(&default_clubs()).map(|_| ());
        let rooms = self.store.seed_if_empty(&default_rooms()).map(|_| ());
        clubs.and(rooms)
    }

    /// Page load: seed the store, then render every panel.
    pub fn load(&mut self) {
        let started_at = Instant::now();
        if let Err(err) = self.seed_initial_data() {
            warn!(
                "event=page_load module=app status=degraded error_code={} error={err}",
                err.code()
            );
        }

        self.controller.refresh();
        info!(
            "event=page_load module=app status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        );
    }

    /// First focus or pointer interaction with the search input.
    pub fn activate_search(&mut self, via: Activation) -> bool {
        self.controller.activate(via)
    }

    /// The search input's value changed.
    pub fn input(&mut self, raw: impl Into<String>, now: Instant) -> bool {
        self.controller.handle_input(raw, now)
    }

    /// Runs a due search, re-rendering every panel. Returns the term used.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        self.controller.poll(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.controller.next_deadline()
    }

    pub fn latest_term(&self) -> &str {
        self.controller.latest_term()
    }

    pub fn document(&self) -> Ref<'_, Document> {
        self.document.borrow()
    }

    pub fn store(&self) -> &Arc<LocalStore> {
        &self.store
    }
}
