//! Persistence layer for preferences and the reminder collection.
//!
//! # Responsibility
//! - Define the key-value preference contract used by services.
//! - Isolate SQL and JSON encoding details from the reminders store.
//!
//! # Invariants
//! - Reads reject invalid persisted state instead of masking it; the
//!   fallback policy belongs to the caller.

pub mod list_blob;
pub mod preference_repo;
