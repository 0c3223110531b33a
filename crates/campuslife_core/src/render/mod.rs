//! HTML projection of record lists into document mount points.
//!
//! # Responsibility
//! - Model the page as named mount points holding rendered fragments.
//! - Render filtered events, clubs and rooms as escaped card markup.
//! - Show an explicit "no matches" fragment for empty results.
//!
//! # Invariants
//! - Every interpolated record value passes through `escape_html`.
//! - A render into a missing mount point changes nothing.
//! - Load failures render as an empty collection, never as an error.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

pub mod cards;
pub mod date;
pub mod panel;
pub mod source;

pub use cards::CardRecord;
pub use panel::Panel;
pub use source::{ReadPolicy, RecordSource, StoreSource};

pub const EVENTS_MOUNT: &str = "#events .card-grid";
pub const CLUBS_MOUNT: &str = "#clubs .card-grid";
pub const ROOMS_MOUNT: &str = "#rooms .card-grid";

/// What a rendered fragment represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Card,
    NoResults,
}

/// One rendered child of a mount point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub html: String,
}

impl Fragment {
    pub fn card(html: impl Into<String>) -> Self {
        Self {
            kind: FragmentKind::Card,
            html: html.into(),
        }
    }

    /// `message` must already be markup-safe.
    pub fn no_results(message: &str) -> Self {
        Self {
            kind: FragmentKind::NoResults,
            html: format!(r#"<li class="card">{message}</li>"#),
        }
    }

    pub fn is_no_results(&self) -> bool {
        self.kind == FragmentKind::NoResults
    }
}

/// A named slot that one renderer owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoint {
    selector: String,
    children: Vec<Fragment>,
}

impl MountPoint {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            children: Vec::new(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn children(&self) -> &[Fragment] {
        &self.children
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append(&mut self, fragment: Fragment) {
        self.children.push(fragment);
    }

    pub fn shows_no_results(&self) -> bool {
        self.children.iter().any(Fragment::is_no_results)
    }

    pub fn card_count(&self) -> usize {
        self.children
            .iter()
            .filter(|child| child.kind == FragmentKind::Card)
            .count()
    }

    pub fn inner_html(&self) -> String {
        self.children
            .iter()
            .map(|child| child.html.as_str())
            .collect()
    }
}

/// The host page: an ordered set of mount points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    mounts: Vec<MountPoint>,
}

/// Document shared between the renderers of one page.
pub type SharedDocument = Rc<RefCell<Document>>;

impl Document {
    /// A document without any mount point.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A document with the events, clubs and rooms mount points.
    pub fn campus_page() -> Self {
        let mut document = Self::empty();
        for selector in [EVENTS_MOUNT, CLUBS_MOUNT, ROOMS_MOUNT] {
            document.add_mount(selector);
        }
        document
    }

    pub fn shared(self) -> SharedDocument {
        Rc::new(RefCell::new(self))
    }

    /// Adds a mount point unless one with `selector` already exists.
    pub fn add_mount(&mut self, selector: &str) {
        if self.mount(selector).is_none() {
            self.mounts.push(MountPoint::new(selector));
        }
    }

    pub fn mount(&self, selector: &str) -> Option<&MountPoint> {
        self.mounts.iter().find(|mount| mount.selector == selector)
    }

    pub fn mount_mut(&mut self, selector: &str) -> Option<&mut MountPoint> {
        self.mounts.iter_mut().find(|mount| mount.selector == selector)
    }

    pub fn mounts(&self) -> &[MountPoint] {
        &self.mounts
    }

    /// Serializes the page as one `<section>` per mount point.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for mount in &self.mounts {
            let (section, grid) = split_selector(&mount.selector);
            // Writing into a String cannot fail.
            let _ = writeln!(
                html,
                r#"<section id="{section}"><div class="{grid}">{}</div></section>"#,
                mount.inner_html()
            );
        }
        html
    }
}

// "#events .card-grid" -> ("events", "card-grid")
fn split_selector(selector: &str) -> (&str, &str) {
    let (id, class) = selector.split_once(' ').unwrap_or((selector, ""));
    (id.trim_start_matches('#'), class.trim_start_matches('.'))
}
