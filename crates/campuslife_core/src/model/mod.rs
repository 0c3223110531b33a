//! Campus-life domain records.
//!
//! # Responsibility
//! - Define the event, club and room shapes shown on the page.
//! - Declare which fields of each record take part in text search.
//!
//! # Invariants
//! - Events are built into the process and never persisted.
//! - Club and room identifiers are assigned by the local store, once.

pub mod club;
pub mod event;
pub mod room;

/// Store-assigned record identifier.
pub type RecordId = i64;
