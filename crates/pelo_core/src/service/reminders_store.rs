//! Reminders store: sole owner and mutator of the list collection.
//!
//! # Responsibility
//! - Load (or bootstrap) the collection from the preference store.
//! - Apply list/reminder mutations addressed by id.
//! - Persist the full collection and notify subscribers after every applied
//!   mutation.
//!
//! # Invariants
//! - A lookup miss is a no-op: nothing is mutated, persisted or notified.
//! - The default list, any list named `INBOX`, and the last list are never
//!   removed.
//! - In-memory state stays authoritative when a persist attempt fails.

use crate::model::list::{ListId, ReminderList, DEFAULT_LIST_NAME};
use crate::model::reminder::{ReminderId, ReminderItem};
use crate::repo::list_blob::{load_lists, save_lists};
use crate::repo::preference_repo::{PreferenceStore, RepoError};
use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};

/// How the collection was obtained when the store was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A stored collection was decoded and adopted.
    Restored { lists: usize },
    /// Nothing (or an empty collection) was stored; defaults were created.
    Bootstrapped,
    /// The stored blob was unreadable; defaults replaced it.
    Recovered { reason: String },
}

/// Handle returned by [`RemindersStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&[ReminderList])>;

/// In-memory reminder collection backed by a whole-blob preference store.
pub struct RemindersStore<P: PreferenceStore> {
    prefs: P,
    lists: Vec<ReminderList>,
    load_outcome: LoadOutcome,
    last_persist_error: Option<RepoError>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<P: PreferenceStore> RemindersStore<P> {
    /// Loads the stored collection or bootstraps a single `INBOX` list.
    ///
    /// Never fails: unreadable state is reported through `load_outcome()`
    /// and replaced by the default collection, which is persisted at once.
    pub fn open(prefs: P) -> Self {
        let (lists, load_outcome) = match load_lists(&prefs) {
            Ok(Some(lists)) if !lists.is_empty() => {
                let count = lists.len();
                (adopt_default_flag(lists), LoadOutcome::Restored { lists: count })
            }
            Ok(_) => (vec![ReminderList::default_inbox()], LoadOutcome::Bootstrapped),
            Err(err) => {
                warn!("event=lists_load module=store status=recovered error={err}");
                (
                    vec![ReminderList::default_inbox()],
                    LoadOutcome::Recovered {
                        reason: err.to_string(),
                    },
                )
            }
        };

        let mut store = Self {
            prefs,
            lists,
            load_outcome,
            last_persist_error: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        if !matches!(store.load_outcome, LoadOutcome::Restored { .. }) {
            store.persist();
        }
        info!(
            "event=store_open module=store status=ok outcome={} lists={}",
            store.outcome_label(),
            store.lists.len()
        );
        store
    }

    pub fn lists(&self) -> &[ReminderList] {
        &self.lists
    }

    pub fn list(&self, list_id: ListId) -> Option<&ReminderList> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    /// Returns the protected list, if the collection has one.
    pub fn default_list(&self) -> Option<&ReminderList> {
        self.lists.iter().find(|list| list.is_default)
    }

    pub fn reminder(&self, list_id: ListId, reminder_id: ReminderId) -> Option<&ReminderItem> {
        self.list(list_id)?.reminder(reminder_id)
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Error of the most recent persist attempt; cleared by the next success.
    pub fn last_persist_error(&self) -> Option<&RepoError> {
        self.last_persist_error.as_ref()
    }

    /// Registers a callback run with the full collection after every applied
    /// mutation.
    pub fn subscribe(&mut self, callback: impl FnMut(&[ReminderList]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns whether the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Appends a new empty list. Empty names are accepted.
    pub fn add_list(&mut self, name: impl Into<String>) -> ListId {
        let list = ReminderList::new(name);
        let list_id = list.id;
        self.lists.push(list);
        self.commit("list_add");
        list_id
    }

    /// Removes a list unless it is the default list, is named `INBOX`, or is
    /// the last one left.
    pub fn delete_list(&mut self, list_id: ListId) -> bool {
        let Some(index) = self.list_index(list_id) else {
            return self.skip("list_delete", "list_not_found");
        };
        let list = &self.lists[index];
        if list.is_default || list.name == DEFAULT_LIST_NAME {
            return self.skip("list_delete", "protected_default");
        }
        if self.lists.len() == 1 {
            return self.skip("list_delete", "last_list");
        }

        self.lists.remove(index);
        self.commit("list_delete");
        true
    }

    pub fn rename_list(&mut self, list_id: ListId, new_name: impl Into<String>) -> bool {
        let Some(index) = self.list_index(list_id) else {
            return self.skip("list_rename", "list_not_found");
        };

        self.lists[index].name = new_name.into();
        self.commit("list_rename");
        true
    }

    /// Appends an open reminder to a list. Blank titles are rejected.
    pub fn add_reminder(
        &mut self,
        list_id: ListId,
        title: impl Into<String>,
        due_date: Option<DateTime<Utc>>,
    ) -> Option<ReminderId> {
        let title = title.into();
        let Some(index) = self.list_index(list_id) else {
            self.skip("reminder_add", "list_not_found");
            return None;
        };
        if title.trim().is_empty() {
            self.skip("reminder_add", "blank_title");
            return None;
        }

        let item = ReminderItem::new(title, due_date);
        let reminder_id = item.id;
        self.lists[index].reminders.push(item);
        self.commit("reminder_add");
        Some(reminder_id)
    }

    pub fn toggle_reminder(&mut self, list_id: ListId, reminder_id: ReminderId) -> bool {
        let Some((list_index, item_index)) = self.reminder_position(list_id, reminder_id) else {
            return self.skip("reminder_toggle", "not_found");
        };

        let item = &mut self.lists[list_index].reminders[item_index];
        item.is_completed = !item.is_completed;
        self.commit("reminder_toggle");
        true
    }

    /// Overwrites title and due date; completion, id and creation time stay.
    pub fn update_reminder(
        &mut self,
        list_id: ListId,
        reminder_id: ReminderId,
        title: impl Into<String>,
        due_date: Option<DateTime<Utc>>,
    ) -> bool {
        let title = title.into();
        if title.trim().is_empty() {
            return self.skip("reminder_update", "blank_title");
        }
        let Some((list_index, item_index)) = self.reminder_position(list_id, reminder_id) else {
            return self.skip("reminder_update", "not_found");
        };

        let item = &mut self.lists[list_index].reminders[item_index];
        item.title = title;
        item.due_date = due_date;
        self.commit("reminder_update");
        true
    }

    pub fn delete_reminder(&mut self, list_id: ListId, reminder_id: ReminderId) -> bool {
        let Some((list_index, item_index)) = self.reminder_position(list_id, reminder_id) else {
            return self.skip("reminder_delete", "not_found");
        };

        self.lists[list_index].reminders.remove(item_index);
        self.commit("reminder_delete");
        true
    }

    fn list_index(&self, list_id: ListId) -> Option<usize> {
        self.lists.iter().position(|list| list.id == list_id)
    }

    fn reminder_position(&self, list_id: ListId, reminder_id: ReminderId) -> Option<(usize, usize)> {
        let list_index = self.list_index(list_id)?;
        let item_index = self.lists[list_index]
            .reminders
            .iter()
            .position(|item| item.id == reminder_id)?;
        Some((list_index, item_index))
    }

    fn skip(&self, event: &str, reason: &str) -> bool {
        debug!("event={event} module=store status=skipped reason={reason}");
        false
    }

    fn commit(&mut self, event: &str) {
        self.persist();
        for (_, subscriber) in &mut self.subscribers {
            subscriber(self.lists.as_slice());
        }
        debug!(
            "event={event} module=store status=ok lists={} subscribers={}",
            self.lists.len(),
            self.subscribers.len()
        );
    }

    fn persist(&mut self) {
        match save_lists(&self.prefs, &self.lists) {
            Ok(()) => self.last_persist_error = None,
            Err(err) => {
                error!("event=lists_persist module=store status=error error={err}");
                self.last_persist_error = Some(err);
            }
        }
    }

    fn outcome_label(&self) -> &'static str {
        match self.load_outcome {
            LoadOutcome::Restored { .. } => "restored",
            LoadOutcome::Bootstrapped => "bootstrapped",
            LoadOutcome::Recovered { .. } => "recovered",
        }
    }
}

/// Flags the first `INBOX` list as default when a stored collection predates
/// the flag.
fn adopt_default_flag(mut lists: Vec<ReminderList>) -> Vec<ReminderList> {
    if lists.iter().any(|list| list.is_default) {
        return lists;
    }
    if let Some(inbox) = lists.iter_mut().find(|list| list.name == DEFAULT_LIST_NAME) {
        inbox.is_default = true;
    }
    lists
}
