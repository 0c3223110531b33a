//! Type-as-you-search pipeline.
//!
//! # Responsibility
//! - Normalize raw input into a bounded search term.
//! - Coalesce bursts of input into one delayed search.
//! - Filter record lists by case-insensitive substring match.
//!
//! # Invariants
//! - Filtering only ever sees sanitized terms.
//! - Filtering preserves the relative order of the input records.

pub mod controller;
pub mod debounce;
pub mod filter;
pub mod sanitize;
