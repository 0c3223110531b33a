//! Built-in event listing.

use crate::search::filter::Searchable;
use std::borrow::Cow;

/// A scheduled campus event.
///
/// `date` keeps the ISO `YYYY-MM-DD` text as authored; formatting for display
/// happens at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl Searchable for Event {
    fn searchable_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.category.as_str()),
            Cow::Borrowed(self.location.as_str()),
            Cow::Borrowed(self.description.as_str()),
        ];
        fields.extend(self.tags.iter().map(|tag| Cow::Borrowed(tag.as_str())));
        fields
    }
}
