//! Domain records for the sidebar and dashboard widget families.
//!
//! # Responsibility
//! - Define the list entry shapes persisted by the sidebar store.
//! - Define the document shapes exchanged with the dashboard store.
//!
//! # Invariants
//! - Every record is identified by a stable generated id, never by its
//!   position in a list.

pub mod dashboard;
pub mod entry;
