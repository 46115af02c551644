//! Whole-collection blob codec for reminder lists.
//!
//! # Responsibility
//! - Encode the ordered list collection into one JSON document.
//! - Decode and validate it back, all-or-nothing.
//!
//! # Invariants
//! - The blob lives under `LISTS_KEY` and is always written in full.
//! - A blob that fails decoding or validation is rejected entirely; no
//!   partial recovery is attempted.

use super::preference_repo::{PreferenceStore, RepoResult};
use crate::model::list::{validate_collection, ReminderList};

/// Preference key holding the serialized list collection.
pub const LISTS_KEY: &str = "SavedLists";

/// Serializes lists in storage order.
pub fn encode_lists(lists: &[ReminderList]) -> RepoResult<String> {
    Ok(serde_json::to_string(lists)?)
}

/// Parses and validates a stored collection.
///
/// # Errors
/// - `Codec` for malformed or schema-incompatible JSON.
/// - `Validation` for nil or duplicated ids.
pub fn decode_lists(raw: &str) -> RepoResult<Vec<ReminderList>> {
    let lists: Vec<ReminderList> = serde_json::from_str(raw)?;
    validate_collection(&lists)?;
    Ok(lists)
}

/// Reads the stored collection; `Ok(None)` when nothing was saved yet.
pub fn load_lists<P: PreferenceStore>(prefs: &P) -> RepoResult<Option<Vec<ReminderList>>> {
    match prefs.get(LISTS_KEY)? {
        Some(raw) => decode_lists(&raw).map(Some),
        None => Ok(None),
    }
}

/// Replaces the stored collection.
pub fn save_lists<P: PreferenceStore>(prefs: &P, lists: &[ReminderList]) -> RepoResult<()> {
    let encoded = encode_lists(lists)?;
    prefs.set(LISTS_KEY, &encoded)
}
