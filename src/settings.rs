use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::catalog;
use crate::constants::*;
use crate::error::{KioskError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Wood,
    Galaxy,
    Nebula,
    Flow,
    Custom,
}

impl Theme {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Wood => "Executive Wood",
            Self::Galaxy => "Deep Galaxy",
            Self::Nebula => "Cosmic Nebula",
            Self::Flow => "Ocean Flow",
            Self::Custom => "Custom Brand",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionEffect {
    Fade,
    Slide,
    Zoom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDockMode {
    Auto,
    Visible,
    Hidden,
}

/// Media substitutions for one catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSettings {
    pub theme: Theme,
    pub custom_color: String,
    pub slide_duration: f64,
    pub show_ticker: bool,
    pub ticker_text: String,
    pub ticker_speed: f64,

    pub company_name: String,
    pub company_name_ar: String,
    pub contact_phone: String,
    pub contact_whatsapp: String,
    pub contact_email: String,
    pub location: String,
    /// Inline `data:` URL of the uploaded logo
    pub logo: Option<String>,

    pub show_date: bool,
    pub clock_format: ClockFormat,
    pub overlay_opacity: f32,

    pub transition_effect: TransitionEffect,
    pub nav_dock_mode: NavDockMode,

    pub hide_cursor: bool,
    pub show_progress_bar: bool,
    pub slide_shuffle: bool,

    pub enable_particles: bool,
    pub enable_blur_effects: bool,
    #[serde(rename = "showHeroCTA")]
    pub show_hero_cta: bool,

    pub enabled_services: Vec<String>,
    pub content_overrides: BTreeMap<String, ContentOverride>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Wood,
            custom_color: "#d97706".to_string(),
            slide_duration: 12.0,
            show_ticker: true,
            ticker_text: "Welcome to Excellent Typing & Travels. We specialize in Visa Processing, Emirates ID, \
                          Medical Typing, and Flight Tickets. Fast & Reliable Service."
                .to_string(),
            ticker_speed: 25.0,

            company_name: "EXCELLENT TYPING & TRAVELS".to_string(),
            company_name_ar: "أكسلنت للطباعة والسفريات".to_string(),
            contact_phone: "+971 52 134 4487".to_string(),
            contact_whatsapp: "02 886 8690".to_string(),
            contact_email: "excellenttypingm11@gmail.com".to_string(),
            location: "Mustafa h shabiya m.11 near crispy chicken".to_string(),
            logo: None,

            show_date: true,
            clock_format: ClockFormat::TwelveHour,
            overlay_opacity: 0.6,

            transition_effect: TransitionEffect::Fade,
            nav_dock_mode: NavDockMode::Auto,

            hide_cursor: true,
            show_progress_bar: true,
            slide_shuffle: false,

            enable_particles: true,
            enable_blur_effects: true,
            show_hero_cta: false,

            // Logical order for auto-rotation
            enabled_services: [
                "hero",
                "golden-visa",
                "emirates-id",
                "family-visa",
                "tourist-visa",
                "medical-typing",
                "flights",
                "business-setup",
                "pro-services",
                "labor-services",
                "tax-services",
                "customs",
                "translation",
                "attestation",
                "embassy-services",
                "traffic-services",
                "insurance",
                "ejari-services",
                "police-clearance",
                "partners",
                "reviews",
                "contact",
            ]
            .iter()
            .map(|id| id.to_string())
            .collect(),
            content_overrides: BTreeMap::new(),
        }
    }
}

impl AppSettings {
    /// Per-slide display time, never shorter than one second.
    pub fn slide_duration(&self) -> Duration {
        let secs = if self.slide_duration.is_finite() {
            self.slide_duration.max(MIN_SLIDE_DURATION)
        } else {
            MIN_SLIDE_DURATION
        };
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::from_secs(12))
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled_services.iter().any(|s| s == id)
    }

    /// Enables or disables a catalog entry. Newly enabled ids go to the end.
    pub fn toggle_service(&mut self, id: &str) -> Result<bool> {
        if catalog::find(id).is_none() {
            return Err(KioskError::UnknownService(id.to_string()));
        }
        if self.is_enabled(id) {
            self.enabled_services.retain(|s| s != id);
            Ok(false)
        } else {
            self.enabled_services.push(id.to_string());
            Ok(true)
        }
    }

    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> Result<()> {
        if self.is_enabled(id) != enabled {
            self.toggle_service(id)?;
        }
        Ok(())
    }

    /// Sets the background override; an empty value removes it.
    pub fn set_background_override(&mut self, id: &str, value: &str) -> Result<()> {
        let entry = self.override_entry(id)?;
        entry.background = non_empty(value);
        Ok(())
    }

    /// Image and video overrides exclude each other; an empty value clears both.
    pub fn set_media_override(&mut self, id: &str, kind: MediaKind, value: &str) -> Result<()> {
        let entry = self.override_entry(id)?;
        match kind {
            MediaKind::Image => {
                entry.video_url = None;
                entry.custom_image = non_empty(value);
            }
            MediaKind::Video => {
                entry.custom_image = None;
                entry.video_url = non_empty(value);
            }
        }
        Ok(())
    }

    pub fn clear_overrides(&mut self, id: &str) {
        self.content_overrides.remove(id);
    }

    fn override_entry(&mut self, id: &str) -> Result<&mut ContentOverride> {
        if catalog::find(id).is_none() {
            return Err(KioskError::UnknownService(id.to_string()));
        }
        Ok(self.content_overrides.entry(id.to_string()).or_default())
    }

    /// Sets one field by its stored JSON key. The value is read as JSON when
    /// it parses, otherwise as a plain string.
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        let object = json
            .as_object_mut()
            .ok_or_else(|| KioskError::InvalidSetting("settings are not an object".to_string()))?;

        if !object.contains_key(key) {
            return Err(KioskError::InvalidSetting(format!("unknown key '{}'", key)));
        }

        let mut parsed = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
        strip_nul(&mut parsed);
        object.insert(key.to_string(), parsed);

        *self = serde_json::from_value(json)
            .map_err(|e| KioskError::InvalidSetting(format!("{}: {}", key, e)))?;
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(value.to_string()) }
}

/// Owns the persisted settings. There is one writer: whoever holds the store.
pub struct SettingsStore {
    path: PathBuf,
    settings: AppSettings,
}

impl SettingsStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = Self::read(&path);
        Self { path, settings }
    }

    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    /// `<config dir>/signage-kiosk/settings.json`
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(CONFIG_DIR_NAME);
        path.push(SETTINGS_FILE_NAME);
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Replaces the settings wholesale and writes them back.
    pub fn save(&mut self, settings: AppSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&settings)?;
        fs::write(&self.path, json)?;
        self.settings = settings;
        info!("Settings saved to {}", self.path.display());
        Ok(())
    }

    pub fn reload(&mut self) -> &AppSettings {
        self.settings = Self::read(&self.path);
        &self.settings
    }

    fn read(path: &Path) -> AppSettings {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => {
                debug!("No settings at {}, using defaults", path.display());
                return AppSettings::default();
            }
        };
        match serde_json::from_str::<Value>(&contents) {
            Ok(mut stored) => {
                strip_nul(&mut stored);
                merge_stored(stored)
            }
            Err(e) => {
                warn!("Failed to parse settings at {}: {}. Using defaults.", path.display(), e);
                AppSettings::default()
            }
        }
    }
}

/// Applies stored fields one key at a time on top of the defaults, so a
/// single stale or mistyped field only loses that field.
fn merge_stored(stored: Value) -> AppSettings {
    let defaults = AppSettings::default();
    let Value::Object(stored) = stored else {
        warn!("Stored settings are not a JSON object, using defaults");
        return defaults;
    };
    let Ok(Value::Object(mut merged)) = serde_json::to_value(&defaults) else {
        return defaults;
    };

    for (key, value) in stored {
        let previous = merged.insert(key.clone(), value);
        if let Err(e) = serde_json::from_value::<AppSettings>(Value::Object(merged.clone())) {
            warn!("Ignoring stored setting '{}': {}", key, e);
            match previous {
                Some(previous) => merged.insert(key, previous),
                None => merged.remove(&key),
            };
        }
    }

    serde_json::from_value(Value::Object(merged)).unwrap_or(defaults)
}

/// raylib draws through C strings, so interior NULs never reach the settings.
fn strip_nul(value: &mut Value) {
    match value {
        Value::String(s) if s.contains('\0') => s.retain(|c| c != '\0'),
        Value::Array(items) => items.iter_mut().for_each(strip_nul),
        Value::Object(fields) => fields.values_mut().for_each(strip_nul),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, Theme::Wood);
        assert_eq!(settings.slide_duration(), Duration::from_secs(12));
        assert_eq!(settings.enabled_services.len(), catalog::SERVICES.len());
        assert_eq!(settings.enabled_services[0], "hero");
        assert!(settings.logo.is_none());
        assert!(settings.content_overrides.is_empty());
    }

    #[test]
    fn test_json_uses_stored_key_names() {
        let json = serde_json::to_string(&AppSettings::default()).unwrap();
        assert!(json.contains("\"slideDuration\":12.0"));
        assert!(json.contains("\"showHeroCTA\":false"));
        assert!(json.contains("\"clockFormat\":\"12h\""));
        assert!(json.contains("\"navDockMode\":\"auto\""));
        assert!(json.contains("\"companyNameAr\""));
    }

    #[test]
    fn test_partial_blob_fills_defaults() {
        let json = r#"{"theme": "galaxy", "slideDuration": 8}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme, Theme::Galaxy);
        assert_eq!(settings.slide_duration(), Duration::from_secs(8));
        assert_eq!(settings.ticker_speed, 25.0);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::open(dir.path().join("nope.json"));
        assert_eq!(store.settings(), &AppSettings::default());
    }

    #[test]
    fn test_corrupt_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        let store = SettingsStore::open(&path);
        assert_eq!(store.settings(), &AppSettings::default());
    }

    #[test]
    fn test_bad_fields_keep_the_rest_of_the_blob() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let json = r#"{"companyName":"ACME TYPING","slideDuration":"8","theme":"ocean","showTicker":false}"#;
        fs::write(&path, json).unwrap();

        let store = SettingsStore::open(&path);
        let settings = store.settings();
        assert_eq!(settings.company_name, "ACME TYPING");
        assert!(!settings.show_ticker);
        assert_eq!(settings.theme, Theme::Wood);
        assert_eq!(settings.slide_duration(), Duration::from_secs(12));
    }

    #[test]
    fn test_non_object_blob_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let store = SettingsStore::open(&path);
        assert_eq!(store.settings(), &AppSettings::default());
    }

    #[test]
    fn test_nul_characters_are_dropped() {
        let mut settings = AppSettings::default();
        settings.set_field("tickerText", r#""a\u0000b""#).unwrap();
        assert_eq!(settings.ticker_text, "ab");

        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"companyName":"AC\u0000ME"}"#).unwrap();
        assert_eq!(SettingsStore::open(&path).settings().company_name, "ACME");
    }

    #[test]
    fn test_load_save_reload_is_identity() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut stored = AppSettings::default();
        stored.theme = Theme::Custom;
        stored.custom_color = "#123456".to_string();
        stored.overlay_opacity = 0.35;
        stored.slide_duration = 7.5;
        stored.set_background_override("flights", "https://example.com/a.jpg").unwrap();

        let mut store = SettingsStore::open(&path);
        store.save(stored.clone()).unwrap();

        let loaded = SettingsStore::open(&path).settings().clone();
        assert_eq!(loaded, stored);

        let mut again = SettingsStore::open(&path);
        again.save(loaded.clone()).unwrap();
        assert_eq!(again.reload(), &stored);
    }

    #[test]
    fn test_toggle_service_appends_at_end() {
        let mut settings = AppSettings::default();
        assert!(!settings.toggle_service("hero").unwrap());
        assert!(!settings.is_enabled("hero"));
        assert!(settings.toggle_service("hero").unwrap());
        assert_eq!(settings.enabled_services.last().unwrap(), "hero");
        assert!(matches!(settings.toggle_service("bogus"), Err(KioskError::UnknownService(_))));
    }

    #[test]
    fn test_media_overrides_exclude_each_other() {
        let mut settings = AppSettings::default();
        settings.set_media_override("customs", MediaKind::Video, "https://v.example/clip.mp4").unwrap();
        settings.set_media_override("customs", MediaKind::Image, "https://i.example/pic.jpg").unwrap();
        let entry = &settings.content_overrides["customs"];
        assert_eq!(entry.custom_image.as_deref(), Some("https://i.example/pic.jpg"));
        assert!(entry.video_url.is_none());

        settings.set_media_override("customs", MediaKind::Image, "").unwrap();
        let entry = &settings.content_overrides["customs"];
        assert!(entry.custom_image.is_none());
    }

    #[test]
    fn test_set_field_by_key() {
        let mut settings = AppSettings::default();
        settings.set_field("slideDuration", "20").unwrap();
        settings.set_field("tickerText", "Open late on Thursdays").unwrap();
        settings.set_field("slideShuffle", "true").unwrap();
        assert_eq!(settings.slide_duration, 20.0);
        assert_eq!(settings.ticker_text, "Open late on Thursdays");
        assert!(settings.slide_shuffle);

        assert!(settings.set_field("noSuchKey", "1").is_err());
        let before = settings.clone();
        assert!(settings.set_field("theme", "plaid").is_err());
        assert_eq!(settings, before);
    }

    #[test]
    fn test_slide_duration_is_clamped() {
        let mut settings = AppSettings::default();
        settings.slide_duration = -3.0;
        assert_eq!(settings.slide_duration(), Duration::from_secs(1));
        settings.slide_duration = 0.0;
        assert_eq!(settings.slide_duration(), Duration::from_secs(1));
    }
}
