//! Reminder list model and display ordering.
//!
//! # Responsibility
//! - Define named containers of reminders.
//! - Own the display comparator used by every presentation layer.
//! - Validate whole collections before they are trusted.
//!
//! # Invariants
//! - `reminders` keeps insertion order; display order is always derived.
//! - `is_default` marks the protected list, independent of its name.

use super::reminder::{ReminderId, ReminderItem};
use super::ModelValidationError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use uuid::Uuid;

/// Stable identifier of a list within the collection.
pub type ListId = Uuid;

/// Name given to the default list at bootstrap.
pub const DEFAULT_LIST_NAME: &str = "INBOX";

/// Named, ordered container of reminders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderList {
    pub id: ListId,
    pub name: String,
    /// Missing in blobs written before the flag existed.
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub reminders: Vec<ReminderItem>,
}

impl ReminderList {
    /// Creates an empty, deletable list with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_default: false,
            reminders: Vec::new(),
        }
    }

    /// Creates the protected `INBOX` list.
    pub fn default_inbox() -> Self {
        Self {
            is_default: true,
            ..Self::new(DEFAULT_LIST_NAME)
        }
    }

    /// Creates an empty list with a caller-provided id.
    ///
    /// # Errors
    /// - `NilListId` when `id` is the nil UUID.
    pub fn with_id(id: ListId, name: impl Into<String>) -> Result<Self, ModelValidationError> {
        if id.is_nil() {
            return Err(ModelValidationError::NilListId);
        }
        Ok(Self {
            id,
            ..Self::new(name)
        })
    }

    /// Returns reminders in display order.
    ///
    /// Computed on every call so the result always reflects the latest
    /// mutation. Ties keep storage order.
    pub fn sorted_reminders(&self) -> Vec<&ReminderItem> {
        let mut sorted = self.reminders.iter().collect::<Vec<_>>();
        sorted.sort_by(|left, right| compare_for_display(left, right));
        sorted
    }

    pub fn reminder(&self, id: ReminderId) -> Option<&ReminderItem> {
        self.reminders.iter().find(|item| item.id == id)
    }

    /// Checks id validity and uniqueness of the contained reminders.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.id.is_nil() {
            return Err(ModelValidationError::NilListId);
        }

        let mut seen = HashSet::with_capacity(self.reminders.len());
        for item in &self.reminders {
            if item.id.is_nil() {
                return Err(ModelValidationError::NilReminderId);
            }
            if !seen.insert(item.id) {
                return Err(ModelValidationError::DuplicateReminderId {
                    list_id: self.id,
                    reminder_id: item.id,
                });
            }
        }
        Ok(())
    }
}

/// Display comparator for reminders.
///
/// Open before completed; dated before undated; earlier due date first;
/// undated pairs fall back to creation time.
pub fn compare_for_display(left: &ReminderItem, right: &ReminderItem) -> Ordering {
    left.is_completed
        .cmp(&right.is_completed)
        .then_with(|| match (left.due_date, right.due_date) {
            (Some(left_due), Some(right_due)) => left_due.cmp(&right_due),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => left.created_date.cmp(&right.created_date),
        })
}

/// Validates every list and the uniqueness of list ids across the collection.
pub fn validate_collection(lists: &[ReminderList]) -> Result<(), ModelValidationError> {
    let mut seen = HashSet::with_capacity(lists.len());
    for list in lists {
        list.validate()?;
        if !seen.insert(list.id) {
            return Err(ModelValidationError::DuplicateListId(list.id));
        }
    }
    Ok(())
}
