//! Per-collection renderer.

use super::{CardRecord, Fragment, RecordSource, SharedDocument};
use crate::search::controller::SearchListener;
use crate::search::filter::filter_records;
use std::marker::PhantomData;

/// Filters one source by the search term and fills its mount point.
pub struct Panel<R, S> {
    source: S,
    document: SharedDocument,
    _record: PhantomData<fn() -> R>,
}

impl<R, S> Panel<R, S>
where
    R: CardRecord,
    S: RecordSource<R>,
{
    pub fn new(source: S, document: SharedDocument) -> Self {
        Self {
            source,
            document,
            _record: PhantomData,
        }
    }

    /// Re-renders the mount point for `term`.
    ///
    /// Returns the number of cards shown, or `None` when the document has no
    /// mount point for this panel.
    pub fn render(&mut self, term: &str) -> Option<usize> {
        {
            let mut document = self.document.borrow_mut();
            document.mount_mut(R::MOUNT)?.clear();
        }

        let records = filter_records(self.source.load(), term);

        let mut document = self.document.borrow_mut();
        let mount = document.mount_mut(R::MOUNT)?;
        if records.is_empty() {
            mount.append(Fragment::no_results(R::EMPTY_MESSAGE));
            return Some(0);
        }
        for record in &records {
            mount.append(record.render_card());
        }
        Some(records.len())
    }
}

impl<R, S> SearchListener for Panel<R, S>
where
    R: CardRecord,
    S: RecordSource<R>,
{
    fn on_search(&mut self, term: &str) {
        self.render(term);
    }
}

#[cfg(test)]
mod tests {
    use super::Panel;
    use crate::model::event::Event;
    use crate::render::{Document, EVENTS_MOUNT};
    use crate::seed::default_events;

    #[test]
    fn missing_mount_is_a_no_op() {
        let document = Document::empty().shared();
        let mut panel: Panel<Event, _> = Panel::new(default_events(), document.clone());
        assert_eq!(panel.render(""), None);
        assert!(document.borrow().mounts().is_empty());
    }

    #[test]
    fn rerender_replaces_previous_children() {
        let document = Document::campus_page().shared();
        let mut panel: Panel<Event, _> = Panel::new(default_events(), document.clone());

        assert_eq!(panel.render(""), Some(4));
        assert_eq!(panel.render("music"), Some(1));
        let document = document.borrow();
        let events = document
            .mount(EVENTS_MOUNT)
            .expect("mount point should exist");
        assert_eq!(events.card_count(), 1);
    }
}
