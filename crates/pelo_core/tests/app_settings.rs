use pelo_core::db::open_db_in_memory;
use pelo_core::{
    AppColorScheme, FontSize, PreferenceStore, SettingsService, SqlitePreferenceStore,
    COLOR_SCHEME_KEY, FONT_SIZE_KEY,
};

#[test]
fn defaults_apply_when_nothing_is_stored() {
    let conn = open_db_in_memory().unwrap();
    let settings = SettingsService::load(SqlitePreferenceStore::new(&conn));

    assert_eq!(settings.font_size(), FontSize::Large);
    assert_eq!(settings.color_scheme(), AppColorScheme::System);
}

#[test]
fn unrecognized_values_fall_back_to_defaults() {
    let conn = open_db_in_memory().unwrap();
    let prefs = SqlitePreferenceStore::new(&conn);
    prefs.set(FONT_SIZE_KEY, "Huge").unwrap();
    prefs.set(COLOR_SCHEME_KEY, "Sepia").unwrap();

    let settings = SettingsService::load(&prefs);
    assert_eq!(settings.font_size(), FontSize::Large);
    assert_eq!(settings.color_scheme(), AppColorScheme::System);
}

#[test]
fn settings_persist_independently_under_their_own_keys() {
    let conn = open_db_in_memory().unwrap();
    let prefs = SqlitePreferenceStore::new(&conn);

    let mut settings = SettingsService::load(&prefs);
    settings.set_font_size(FontSize::Small).unwrap();
    assert_eq!(prefs.get(FONT_SIZE_KEY).unwrap().as_deref(), Some("Small"));
    assert_eq!(prefs.get(COLOR_SCHEME_KEY).unwrap(), None);

    settings.set_color_scheme(AppColorScheme::Dark).unwrap();

    let reloaded = SettingsService::load(&prefs);
    assert_eq!(reloaded.font_size(), FontSize::Small);
    assert_eq!(reloaded.color_scheme(), AppColorScheme::Dark);
}

#[test]
fn settings_do_not_touch_reminder_lists() {
    let conn = open_db_in_memory().unwrap();
    let prefs = SqlitePreferenceStore::new(&conn);

    let mut settings = SettingsService::load(&prefs);
    settings.set_color_scheme(AppColorScheme::Light).unwrap();

    assert_eq!(prefs.get(pelo_core::LISTS_KEY).unwrap(), None);
}
