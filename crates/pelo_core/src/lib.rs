//! Core reminder lists, their display ordering and persistence.
//! This crate is the single source of truth for reminder invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogInitError};
pub use model::list::{
    compare_for_display, validate_collection, ListId, ReminderList, DEFAULT_LIST_NAME,
};
pub use model::reminder::{ReminderId, ReminderItem};
pub use model::ModelValidationError;
pub use repo::list_blob::{decode_lists, encode_lists, load_lists, save_lists, LISTS_KEY};
pub use repo::preference_repo::{PreferenceStore, RepoError, RepoResult, SqlitePreferenceStore};
pub use service::reminders_store::{LoadOutcome, RemindersStore, SubscriptionId};
pub use service::settings_service::{
    AppColorScheme, FontSize, SettingsService, COLOR_SCHEME_KEY, FONT_SIZE_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
