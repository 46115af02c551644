//! Appearance preferences: font size scale and color theme.
//!
//! # Responsibility
//! - Read both settings with defaults when absent or unrecognized.
//! - Persist each setting under its own preference key.
//!
//! # Invariants
//! - Stored values are the raw names (`Small`, `Dark`, ...).
//! - Settings never touch the reminder collection.

use crate::repo::preference_repo::{PreferenceStore, RepoResult};
use log::{info, warn};

pub const FONT_SIZE_KEY: &str = "fontSize";
pub const COLOR_SCHEME_KEY: &str = "colorScheme";

/// Text size scale applied by presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Small,
    Medium,
    #[default]
    Large,
}

impl FontSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == value)
    }
}

/// Theme override; `System` follows the platform appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppColorScheme {
    #[default]
    System,
    Light,
    Dark,
}

impl AppColorScheme {
    pub const ALL: [Self; 3] = [Self::System, Self::Light, Self::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scheme| scheme.as_str() == value)
    }
}

/// Cached appearance settings over a preference store.
pub struct SettingsService<P: PreferenceStore> {
    prefs: P,
    font_size: FontSize,
    color_scheme: AppColorScheme,
}

impl<P: PreferenceStore> SettingsService<P> {
    /// Loads both settings; read errors degrade to defaults.
    pub fn load(prefs: P) -> Self {
        let font_size = read_setting(&prefs, FONT_SIZE_KEY, FontSize::parse).unwrap_or_default();
        let color_scheme =
            read_setting(&prefs, COLOR_SCHEME_KEY, AppColorScheme::parse).unwrap_or_default();
        Self {
            prefs,
            font_size,
            color_scheme,
        }
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    pub fn color_scheme(&self) -> AppColorScheme {
        self.color_scheme
    }

    /// Updates the cached value, then persists it.
    ///
    /// The cached value is kept even when the write fails.
    pub fn set_font_size(&mut self, font_size: FontSize) -> RepoResult<()> {
        self.font_size = font_size;
        self.write(FONT_SIZE_KEY, font_size.as_str())
    }

    /// Updates the cached value, then persists it.
    pub fn set_color_scheme(&mut self, color_scheme: AppColorScheme) -> RepoResult<()> {
        self.color_scheme = color_scheme;
        self.write(COLOR_SCHEME_KEY, color_scheme.as_str())
    }

    fn write(&self, key: &str, value: &str) -> RepoResult<()> {
        self.prefs.set(key, value)?;
        info!("event=setting_write module=settings status=ok key={key} value={value}");
        Ok(())
    }
}

fn read_setting<P: PreferenceStore, T>(
    prefs: &P,
    key: &str,
    parse: fn(&str) -> Option<T>,
) -> Option<T> {
    match prefs.get(key) {
        Ok(Some(raw)) => {
            let parsed = parse(raw.as_str());
            if parsed.is_none() {
                warn!("event=setting_read module=settings status=defaulted key={key} reason=unrecognized");
            }
            parsed
        }
        Ok(None) => None,
        Err(err) => {
            warn!("event=setting_read module=settings status=defaulted key={key} error={err}");
            None
        }
    }
}
