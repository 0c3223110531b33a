//! Collection descriptors and row mapping for persisted records.

use super::{StoreError, StoreResult};
use crate::model::club::Club;
use crate::model::room::Room;
use rusqlite::{params, Connection, Row};
use std::fmt::{Display, Formatter};

/// Named record collections held by the local store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Clubs,
    Rooms,
}

impl Collection {
    /// Table backing the collection.
    pub fn name(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Rooms => "rooms",
        }
    }

    /// Columns with a non-unique secondary index.
    pub fn secondary_indexes(self) -> [&'static str; 2] {
        match self {
            Self::Clubs => ["name", "category"],
            Self::Rooms => ["name", "building"],
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A record type stored in one [`Collection`].
pub trait StoredRecord: Sized {
    const COLLECTION: Collection;

    /// Column list in the order [`StoredRecord::from_row`] expects.
    const COLUMNS: &'static str;

    /// Inserts the record under a fresh key and returns that key.
    ///
    /// Any `id` already set on the record is ignored.
    fn insert(&self, conn: &Connection) -> StoreResult<i64>;

    fn from_row(row: &Row<'_>) -> StoreResult<Self>;
}

impl StoredRecord for Club {
    const COLLECTION: Collection = Collection::Clubs;
    const COLUMNS: &'static str = "id, name, category, description, contact, tags";

    fn insert(&self, conn: &Connection) -> StoreResult<i64> {
        let tags = encode_list(Self::COLLECTION, &self.tags)?;
        conn.execute(
            "INSERT INTO clubs (name, category, description, contact, tags)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                self.name.as_str(),
                self.category.as_str(),
                self.description.as_str(),
                self.contact.as_str(),
                tags,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn from_row(row: &Row<'_>) -> StoreResult<Self> {
        let tags: String = row.get("tags")?;
        Ok(Self {
            id: Some(row.get("id")?),
            name: row.get("name")?,
            category: row.get("category")?,
            description: row.get("description")?,
            contact: row.get("contact")?,
            tags: decode_list(Self::COLLECTION, "tags", &tags)?,
        })
    }
}

impl StoredRecord for Room {
    const COLLECTION: Collection = Collection::Rooms;
    const COLUMNS: &'static str = "id, name, building, capacity, equipment, type";

    fn insert(&self, conn: &Connection) -> StoreResult<i64> {
        let equipment = encode_list(Self::COLLECTION, &self.equipment)?;
        conn.execute(
            "INSERT INTO rooms (name, building, capacity, equipment, type)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                self.name.as_str(),
                self.building.as_str(),
                self.capacity,
                equipment,
                self.kind.as_str(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn from_row(row: &Row<'_>) -> StoreResult<Self> {
        let capacity = match row.get::<_, i64>("capacity")? {
            value if (0..=i64::from(u32::MAX)).contains(&value) => value as u32,
            other => {
                return Err(StoreError::InvalidData {
                    collection: Self::COLLECTION,
                    message: format!("invalid capacity `{other}` in rooms.capacity"),
                });
            }
        };
        let equipment: String = row.get("equipment")?;
        Ok(Self {
            id: Some(row.get("id")?),
            name: row.get("name")?,
            building: row.get("building")?,
            capacity,
            equipment: decode_list(Self::COLLECTION, "equipment", &equipment)?,
            kind: row.get("type")?,
        })
    }
}

fn encode_list(collection: Collection, values: &[String]) -> StoreResult<String> {
    serde_json::to_string(values).map_err(|err| StoreError::InvalidData {
        collection,
        message: format!("cannot encode list: {err}"),
    })
}

fn decode_list(collection: Collection, column: &str, raw: &str) -> StoreResult<Vec<String>> {
    serde_json::from_str(raw).map_err(|err| StoreError::InvalidData {
        collection,
        message: format!("invalid JSON list in {collection}.{column}: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::{decode_list, Collection};

    #[test]
    fn secondary_indexes_match_schema() {
        assert_eq!(Collection::Clubs.secondary_indexes(), ["name", "category"]);
        assert_eq!(Collection::Rooms.secondary_indexes(), ["name", "building"]);
    }

    #[test]
    fn decode_list_rejects_non_array() {
        let err = decode_list(Collection::Clubs, "tags", "{}").unwrap_err();
        assert!(err.to_string().contains("clubs.tags"));
    }
}
