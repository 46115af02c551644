//! Reminder domain model.
//!
//! # Responsibility
//! - Define the canonical list/item records owned by the reminders store.
//! - Provide the pure display ordering and due-date projections.
//!
//! # Invariants
//! - Every list and item is identified by a non-nil UUID.
//! - Derived values (`sorted_reminders`, `is_overdue`, `is_due_today`) are
//!   recomputed on demand and never stored.

pub mod list;
pub mod reminder;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Structural violations detected in lists, items or whole collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    NilListId,
    NilReminderId,
    DuplicateListId(list::ListId),
    DuplicateReminderId {
        list_id: list::ListId,
        reminder_id: reminder::ReminderId,
    },
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilListId => write!(f, "list id must not be nil"),
            Self::NilReminderId => write!(f, "reminder id must not be nil"),
            Self::DuplicateListId(id) => write!(f, "duplicate list id: {id}"),
            Self::DuplicateReminderId {
                list_id,
                reminder_id,
            } => write!(f, "duplicate reminder id {reminder_id} in list {list_id}"),
        }
    }
}

impl Error for ModelValidationError {}
