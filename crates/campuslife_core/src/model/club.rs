//! Student club record.

use super::RecordId;
use crate::search::filter::Searchable;
use std::borrow::Cow;

/// A student club persisted in the `clubs` collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    /// `None` until the store assigns a key on insert.
    pub id: Option<RecordId>,
    pub name: String,
    pub category: String,
    pub description: String,
    pub contact: String,
    pub tags: Vec<String>,
}

impl Club {
    /// Creates an unsaved club with no tags.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.into(),
            description: description.into(),
            contact: contact.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl Searchable for Club {
    fn searchable_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.category.as_str()),
            Cow::Borrowed(self.description.as_str()),
            Cow::Borrowed(self.contact.as_str()),
        ];
        fields.extend(self.tags.iter().map(|tag| Cow::Borrowed(tag.as_str())));
        fields
    }
}
