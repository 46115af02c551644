//! Reminder item model.
//!
//! # Responsibility
//! - Define the single actionable entry stored inside a list.
//! - Derive overdue / due-today flags against a caller-supplied clock.
//!
//! # Invariants
//! - `id` and `created_date` never change after creation.
//! - Completed items are never overdue nor due today.

use super::ModelValidationError;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a reminder within its list.
pub type ReminderId = Uuid;

/// One reminder entry.
///
/// Serialized with camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderItem {
    pub id: ReminderId,
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
    pub created_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl ReminderItem {
    /// Creates an incomplete reminder with a fresh id, stamped with the
    /// current time.
    pub fn new(title: impl Into<String>, due_date: Option<DateTime<Utc>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            is_completed: false,
            created_date: Utc::now(),
            due_date,
        }
    }

    /// Creates a reminder with caller-provided identity and creation time.
    ///
    /// Used by import paths and tests that need deterministic ordering.
    ///
    /// # Errors
    /// - `NilReminderId` when `id` is the nil UUID.
    pub fn with_id(
        id: ReminderId,
        title: impl Into<String>,
        created_date: DateTime<Utc>,
    ) -> Result<Self, ModelValidationError> {
        if id.is_nil() {
            return Err(ModelValidationError::NilReminderId);
        }
        Ok(Self {
            id,
            title: title.into(),
            is_completed: false,
            created_date,
            due_date: None,
        })
    }

    /// Overdue means: dated, still open, and due strictly before `now`.
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        match self.due_date {
            Some(due) if !self.is_completed => due < now,
            _ => false,
        }
    }

    /// Due today means: dated, still open, and due on the same calendar day
    /// as `now` in `now`'s time zone.
    pub fn is_due_today_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        match self.due_date {
            Some(due) if !self.is_completed => {
                due.with_timezone(&now.timezone()).date_naive() == now.date_naive()
            }
            _ => false,
        }
    }

    /// `is_overdue_at` evaluated against the wall clock.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Utc::now())
    }

    /// `is_due_today_at` evaluated against the local wall clock.
    pub fn is_due_today(&self) -> bool {
        self.is_due_today_at(&Local::now())
    }
}
