//! Bookable study room record.

use super::RecordId;
use crate::search::filter::Searchable;
use std::borrow::Cow;

/// A study room persisted in the `rooms` collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// `None` until the store assigns a key on insert.
    pub id: Option<RecordId>,
    pub name: String,
    pub building: String,
    pub capacity: u32,
    pub equipment: Vec<String>,
    /// Room type, stored in the `type` column.
    pub kind: String,
}

impl Room {
    /// Creates an unsaved room with no equipment.
    pub fn new(
        name: impl Into<String>,
        building: impl Into<String>,
        capacity: u32,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            building: building.into(),
            capacity,
            equipment: Vec::new(),
            kind: kind.into(),
        }
    }

    pub fn with_equipment<I, S>(mut self, equipment: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equipment = equipment.into_iter().map(Into::into).collect();
        self
    }
}

impl Searchable for Room {
    // Capacity is matched as its decimal text, so "24" finds a 24-seat room.
    fn searchable_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.building.as_str()),
            Cow::Borrowed(self.kind.as_str()),
            Cow::Owned(self.capacity.to_string()),
        ];
        fields.extend(self.equipment.iter().map(|item| Cow::Borrowed(item.as_str())));
        fields
    }
}
