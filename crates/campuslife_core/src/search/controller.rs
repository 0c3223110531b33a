//! Search input controller.
//!
//! # Responsibility
//! - Accept raw input events once the search input has been activated.
//! - Debounce raw values, sanitize the winner and broadcast it.
//! - Own the latest search term read by every render pass.
//!
//! # Invariants
//! - Input before activation is ignored.
//! - Sanitization happens when the debounce fires, not per keystroke.
//! - Listeners are notified in registration order.

use super::debounce::Debouncer;
use super::sanitize::sanitize_search_term;
use log::{debug, info};
use std::time::{Duration, Instant};

/// Default quiet period between the last keystroke and the search.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Receiver of sanitized search terms.
pub trait SearchListener {
    fn on_search(&mut self, term: &str);
}

impl<F> SearchListener for F
where
    F: FnMut(&str),
{
    fn on_search(&mut self, term: &str) {
        self(term)
    }
}

/// How the search input was first touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Focus,
    Pointer,
}

impl Activation {
    fn as_str(self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Pointer => "pointer",
        }
    }
}

/// Owns the debounced search pipeline and its listeners.
pub struct SearchController {
    debouncer: Debouncer<String>,
    listeners: Vec<Box<dyn SearchListener>>,
    latest_term: String,
    activated: bool,
}

impl SearchController {
    pub fn new(delay: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(delay),
            listeners: Vec::new(),
            latest_term: String::new(),
            activated: false,
        }
    }

    /// Registers a listener that receives every broadcast term.
    pub fn subscribe(&mut self, listener: impl SearchListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Attaches the input handler. Returns `true` only on the first call.
    pub fn activate(&mut self, via: Activation) -> bool {
        if self.activated {
            return false;
        }
        self.activated = true;
        info!(
            "event=search_activate module=search status=ok via={}",
            via.as_str()
        );
        true
    }

    pub fn is_active(&self) -> bool {
        self.activated
    }

    /// Feeds the input's current raw value. Returns whether it was accepted.
    pub fn handle_input(&mut self, raw: impl Into<String>, now: Instant) -> bool {
        if !self.activated {
            return false;
        }
        self.debouncer.call(raw.into(), now);
        true
    }

    /// When the pending search is due, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Fires the pending search when due and returns the broadcast term.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let raw = self.debouncer.poll(now)?;
        let term = sanitize_search_term(&raw);
        debug!(
            "event=search_fire module=search status=ok term_chars={} listeners={}",
            term.chars().count(),
            self.listeners.len()
        );
        self.broadcast(term.clone());
        Some(term)
    }

    /// Re-broadcasts the latest term, e.g. for the initial render.
    pub fn refresh(&mut self) {
        let term = self.latest_term.clone();
        self.broadcast(term);
    }

    pub fn latest_term(&self) -> &str {
        &self.latest_term
    }

    fn broadcast(&mut self, term: String) {
        for listener in &mut self.listeners {
            listener.on_search(&term);
        }
        self.latest_term = term;
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::{Activation, SearchController};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    fn recording_controller() -> (SearchController, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut controller = SearchController::new(Duration::from_millis(300));
        controller.subscribe(move |term: &str| sink.borrow_mut().push(term.to_string()));
        (controller, seen)
    }

    #[test]
    fn input_before_activation_is_ignored() {
        let (mut controller, seen) = recording_controller();
        let start = Instant::now();

        assert!(!controller.handle_input("music", start));
        assert_eq!(controller.poll(start + Duration::from_secs(1)), None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn activation_is_idempotent() {
        let mut controller = SearchController::default();
        assert!(controller.activate(Activation::Focus));
        assert!(!controller.activate(Activation::Pointer));
        assert!(controller.is_active());
    }

    #[test]
    fn fire_sanitizes_and_records_latest_term() {
        let (mut controller, seen) = recording_controller();
        let start = Instant::now();
        controller.activate(Activation::Pointer);

        controller.handle_input("  winter ", start);
        controller.handle_input("  winter   music ", start + Duration::from_millis(40));
        let fired = controller.poll(start + Duration::from_millis(340));

        assert_eq!(fired.as_deref(), Some("winter music"));
        assert_eq!(controller.latest_term(), "winter music");
        assert_eq!(*seen.borrow(), vec!["winter music".to_string()]);
    }

    #[test]
    fn refresh_rebroadcasts_latest_term() {
        let (mut controller, seen) = recording_controller();
        controller.refresh();
        assert_eq!(*seen.borrow(), vec![String::new()]);
    }
}
