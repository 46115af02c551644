//! FFI use-case API for the Flutter presentation layer.
//!
//! # Responsibility
//! - Expose the reminder store operations and settings to Dart via FRB.
//! - Translate between string ids / epoch milliseconds and core types.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Each call runs one full load-mutate-persist cycle under a process-wide
//!   lock, so concurrent host threads never interleave blob writes.

use chrono::{DateTime, Utc};
use log::warn;
use pelo_core::db::open_db;
use pelo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, AppColorScheme,
    FontSize, ReminderItem, ReminderList, RemindersStore, SettingsService, SqlitePreferenceStore,
};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

const DB_FILE_NAME: &str = "pelo_reminders.sqlite3";
const DB_PATH_ENV: &str = "PELO_DB_PATH";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static STORE_LOCK: Mutex<()> = Mutex::new(());

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory for rolling log files.
///
/// Returns an empty string on success and the error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One reminder row, with flags evaluated at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderItemView {
    pub id: String,
    pub title: String,
    pub is_completed: bool,
    pub created_at_ms: i64,
    pub due_at_ms: Option<i64>,
    pub is_overdue: bool,
    pub is_due_today: bool,
}

/// One list with reminders already in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderListView {
    pub id: String,
    pub name: String,
    pub is_default: bool,
    pub reminders: Vec<ReminderItemView>,
}

/// Full collection snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListsSnapshot {
    pub ok: bool,
    pub lists: Vec<ReminderListView>,
    pub message: String,
}

/// Result envelope for mutations.
///
/// `ok=false` with a message covers invalid input, lookup misses and
/// rejected operations alike; none of them change stored state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Id of the created list/reminder, when the action creates one.
    pub id: Option<String>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<Uuid>) -> Self {
        Self {
            ok: true,
            id: id.map(|value| value.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Appearance settings as raw names (`Small|Medium|Large`,
/// `System|Light|Dark`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub font_size: String,
    pub color_scheme: String,
}

/// Returns every list with display-ordered reminders.
#[flutter_rust_bridge::frb(sync)]
pub fn lists_snapshot() -> ListsSnapshot {
    match with_store(|store| store.lists().iter().map(to_list_view).collect::<Vec<_>>()) {
        Ok(lists) => ListsSnapshot {
            ok: true,
            message: format!("{} list(s).", lists.len()),
            lists,
        },
        Err(err) => ListsSnapshot {
            ok: false,
            lists: Vec::new(),
            message: format!("lists_snapshot failed: {err}"),
        },
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn list_add(name: String) -> ActionResponse {
    let name = name.trim().to_string();
    match with_store(|store| store.add_list(name)) {
        Ok(list_id) => ActionResponse::success("List created.", Some(list_id)),
        Err(err) => ActionResponse::failure(format!("list_add failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn list_delete(list_id: String) -> ActionResponse {
    let list_id = match parse_id("list_id", &list_id) {
        Ok(id) => id,
        Err(message) => return ActionResponse::failure(format!("list_delete failed: {message}")),
    };
    applied(
        "list_delete",
        "List deleted.",
        "list not found or protected",
        with_store(|store| store.delete_list(list_id)),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn list_rename(list_id: String, new_name: String) -> ActionResponse {
    let list_id = match parse_id("list_id", &list_id) {
        Ok(id) => id,
        Err(message) => return ActionResponse::failure(format!("list_rename failed: {message}")),
    };
    let new_name = new_name.trim().to_string();
    applied(
        "list_rename",
        "List renamed.",
        "list not found",
        with_store(|store| store.rename_list(list_id, new_name)),
    )
}

/// Adds a reminder; `due_at_ms` is epoch milliseconds.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_add(list_id: String, title: String, due_at_ms: Option<i64>) -> ActionResponse {
    let parsed = parse_id("list_id", &list_id)
        .and_then(|list_id| parse_due(due_at_ms).map(|due| (list_id, due)));
    let (list_id, due) = match parsed {
        Ok(values) => values,
        Err(message) => return ActionResponse::failure(format!("reminder_add failed: {message}")),
    };
    let title = title.trim().to_string();

    match with_store(|store| store.add_reminder(list_id, title, due)) {
        Ok(Some(reminder_id)) => ActionResponse::success("Reminder created.", Some(reminder_id)),
        Ok(None) => ActionResponse::failure("reminder_add failed: list not found or blank title"),
        Err(err) => ActionResponse::failure(format!("reminder_add failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn reminder_toggle(list_id: String, reminder_id: String) -> ActionResponse {
    let (list_id, reminder_id) = match parse_pair(&list_id, &reminder_id) {
        Ok(ids) => ids,
        Err(message) => {
            return ActionResponse::failure(format!("reminder_toggle failed: {message}"))
        }
    };
    applied(
        "reminder_toggle",
        "Reminder toggled.",
        "reminder not found",
        with_store(|store| store.toggle_reminder(list_id, reminder_id)),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn reminder_update(
    list_id: String,
    reminder_id: String,
    title: String,
    due_at_ms: Option<i64>,
) -> ActionResponse {
    let parsed = parse_pair(&list_id, &reminder_id)
        .and_then(|ids| parse_due(due_at_ms).map(|due| (ids, due)));
    let ((list_id, reminder_id), due) = match parsed {
        Ok(values) => values,
        Err(message) => {
            return ActionResponse::failure(format!("reminder_update failed: {message}"))
        }
    };
    let title = title.trim().to_string();
    applied(
        "reminder_update",
        "Reminder updated.",
        "reminder not found or blank title",
        with_store(|store| store.update_reminder(list_id, reminder_id, title, due)),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn reminder_delete(list_id: String, reminder_id: String) -> ActionResponse {
    let (list_id, reminder_id) = match parse_pair(&list_id, &reminder_id) {
        Ok(ids) => ids,
        Err(message) => {
            return ActionResponse::failure(format!("reminder_delete failed: {message}"))
        }
    };
    applied(
        "reminder_delete",
        "Reminder deleted.",
        "reminder not found",
        with_store(|store| store.delete_reminder(list_id, reminder_id)),
    )
}

/// Reads both appearance settings; falls back to defaults on any failure.
#[flutter_rust_bridge::frb(sync)]
pub fn settings_get() -> SettingsView {
    let (font_size, color_scheme) = with_settings(|settings| {
        Ok((settings.font_size(), settings.color_scheme()))
    })
    .unwrap_or_else(|err| {
        warn!("event=settings_get module=ffi status=defaulted error={err}");
        (FontSize::default(), AppColorScheme::default())
    });
    SettingsView {
        font_size: font_size.as_str().to_string(),
        color_scheme: color_scheme.as_str().to_string(),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn settings_set_font_size(value: String) -> ActionResponse {
    let Some(font_size) = FontSize::parse(value.trim()) else {
        return ActionResponse::failure(format!(
            "settings_set_font_size failed: unsupported value `{value}`"
        ));
    };
    match with_settings(|settings| settings.set_font_size(font_size).map_err(|err| err.to_string()))
    {
        Ok(()) => ActionResponse::success("Font size saved.", None),
        Err(err) => ActionResponse::failure(format!("settings_set_font_size failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn settings_set_color_scheme(value: String) -> ActionResponse {
    let Some(color_scheme) = AppColorScheme::parse(value.trim()) else {
        return ActionResponse::failure(format!(
            "settings_set_color_scheme failed: unsupported value `{value}`"
        ));
    };
    match with_settings(|settings| {
        settings
            .set_color_scheme(color_scheme)
            .map_err(|err| err.to_string())
    }) {
        Ok(()) => ActionResponse::success("Theme saved.", None),
        Err(err) => ActionResponse::failure(format!("settings_set_color_scheme failed: {err}")),
    }
}

fn applied(
    operation: &str,
    success: &str,
    skipped: &str,
    result: Result<bool, String>,
) -> ActionResponse {
    match result {
        Ok(true) => ActionResponse::success(success, None),
        Ok(false) => ActionResponse::failure(format!("{operation} failed: {skipped}")),
        Err(err) => ActionResponse::failure(format!("{operation} failed: {err}")),
    }
}

fn parse_id(field: &str, raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid {field} `{raw}`"))
}

fn parse_pair(list_id: &str, reminder_id: &str) -> Result<(Uuid, Uuid), String> {
    Ok((
        parse_id("list_id", list_id)?,
        parse_id("reminder_id", reminder_id)?,
    ))
}

fn parse_due(due_at_ms: Option<i64>) -> Result<Option<DateTime<Utc>>, String> {
    due_at_ms
        .map(|millis| {
            DateTime::<Utc>::from_timestamp_millis(millis)
                .ok_or_else(|| format!("due_at_ms out of range: {millis}"))
        })
        .transpose()
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_store<T>(
    f: impl FnOnce(&mut RemindersStore<SqlitePreferenceStore<'_>>) -> T,
) -> Result<T, String> {
    let _guard = STORE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let conn = open_db(resolve_db_path()).map_err(|err| format!("DB open failed: {err}"))?;
    let mut store = RemindersStore::open(SqlitePreferenceStore::new(&conn));
    let output = f(&mut store);
    match store.last_persist_error() {
        Some(err) => Err(format!("changes were not saved: {err}")),
        None => Ok(output),
    }
}

fn with_settings<T>(
    f: impl FnOnce(&mut SettingsService<SqlitePreferenceStore<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let _guard = STORE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let conn = open_db(resolve_db_path()).map_err(|err| format!("DB open failed: {err}"))?;
    let mut settings = SettingsService::load(SqlitePreferenceStore::new(&conn));
    f(&mut settings)
}

fn to_list_view(list: &ReminderList) -> ReminderListView {
    let now = Utc::now();
    let today = chrono::Local::now();
    ReminderListView {
        id: list.id.to_string(),
        name: list.name.clone(),
        is_default: list.is_default,
        reminders: list
            .sorted_reminders()
            .into_iter()
            .map(|item| to_item_view(item, now, &today))
            .collect(),
    }
}

fn to_item_view(
    item: &ReminderItem,
    now: DateTime<Utc>,
    today: &DateTime<chrono::Local>,
) -> ReminderItemView {
    ReminderItemView {
        id: item.id.to_string(),
        title: item.title.clone(),
        is_completed: item.is_completed,
        created_at_ms: item.created_date.timestamp_millis(),
        due_at_ms: item.due_date.map(|due| due.timestamp_millis()),
        is_overdue: item.is_overdue_at(now),
        is_due_today: item.is_due_today_at(today),
    }
}
